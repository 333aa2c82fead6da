use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i32,
    pub roles: Vec<String>,
}

impl Session {
    pub fn has_any_role(&self, wanted: &[&str]) -> bool {
        self.roles.iter().any(|r| wanted.contains(&r.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(roles: &[&str]) -> Session {
        Session {
            user_id: 1,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn cashier_counts_as_staff() {
        assert!(session(&["cashier"]).has_any_role(&["cashier", "admin"]));
    }

    #[test]
    fn admin_counts_as_staff() {
        assert!(session(&["admin"]).has_any_role(&["cashier", "admin"]));
    }

    #[test]
    fn customer_is_not_staff() {
        assert!(!session(&["customer"]).has_any_role(&["cashier", "admin"]));
    }

    #[test]
    fn no_roles_matches_nothing() {
        assert!(!session(&[]).has_any_role(&["cashier", "admin"]));
    }
}
