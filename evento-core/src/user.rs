//! The local user profile for a session.

use std::fmt;

use uuid::Uuid;

/// Profile entered at the start of a session. Not persisted; the id is fresh every run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub city: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>, city: impl Into<String>) -> Self {
        User {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            city: city.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.name, self.email, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_user_gets_a_fresh_id() {
        let a = User::new("Ana", "ana@mail.com", "Recife");
        let b = User::new("Ana", "ana@mail.com", "Recife");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn display() {
        let user = User::new("Ana", "ana@mail.com", "Recife");
        assert_eq!(user.to_string(), "Ana (ana@mail.com) - Recife");
    }
}
