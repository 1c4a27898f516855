//! GraphQL enum types for lift status, trail status and difficulty

use crate::data::{Difficulty, LiftStatus, TrailStatus};
use async_graphql::dynamic::{Enum, EnumItem};

pub const LIFT_STATUS: &str = "LiftStatus";
pub const TRAIL_STATUS: &str = "TrailStatus";
pub const DIFFICULTY: &str = "Difficulty";

/// All enum types exposed by the schema
pub fn register_enums() -> Vec<Enum> {
    vec![lift_status_enum(), trail_status_enum(), difficulty_enum()]
}

fn lift_status_enum() -> Enum {
    LiftStatus::ALL
        .iter()
        .fold(Enum::new(LIFT_STATUS), |e, status| {
            e.item(EnumItem::new(status.as_str()))
        })
        .description("Whether a lift is running")
}

fn trail_status_enum() -> Enum {
    TrailStatus::ALL
        .iter()
        .fold(Enum::new(TRAIL_STATUS), |e, status| {
            e.item(EnumItem::new(status.as_str()))
        })
}

fn difficulty_enum() -> Enum {
    Difficulty::ALL
        .iter()
        .fold(Enum::new(DIFFICULTY), |e, difficulty| {
            e.item(EnumItem::new(difficulty.as_str()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_registration() {
        let enums = register_enums();
        let names: Vec<&str> = enums.iter().map(|e| e.type_name()).collect();
        assert_eq!(names, vec![LIFT_STATUS, TRAIL_STATUS, DIFFICULTY]);
    }
}
