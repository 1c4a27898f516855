//! `Lift` and `Trail` object types
//!
//! Stored attributes are served by one generic field resolver that reads the
//! identically-named attribute off the parent record. Only the derived
//! relationship fields (`trailAccess`, `accessedByLifts`) have their own resolvers.

use crate::data::{Lift, Trail};
use crate::schema::enums::{DIFFICULTY, LIFT_STATUS, TRAIL_STATUS};
use crate::schema::resolver::Resolvers;

use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, ResolverContext, TypeRef};
use async_graphql::{Name, Value};

pub const LIFT: &str = "Lift";
pub const TRAIL: &str = "Trail";

/// A record whose stored attributes can be read by GraphQL field name
pub trait Record: Send + Sync + 'static {
    /// Value of the attribute behind `field`, or `None` when it is absent or null
    fn attribute(&self, field: &str) -> Option<Value>;
}

impl Record for Lift {
    fn attribute(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::String(self.id.clone())),
            "name" => Some(Value::String(self.name.clone())),
            "status" => self.status.map(|status| enum_value(status.as_str())),
            "capacity" => Some(Value::Number(self.capacity.into())),
            "night" => self.night.map(Value::Boolean),
            "elevationGain" => Some(Value::Number(self.elevation_gain.into())),
            _ => None,
        }
    }
}

impl Record for Trail {
    fn attribute(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::String(self.id.clone())),
            "name" => Some(Value::String(self.name.clone())),
            "lift" => Some(Value::List(
                self.lift.iter().cloned().map(Value::String).collect(),
            )),
            "difficulty" => Some(enum_value(self.difficulty.as_str())),
            "status" => Some(enum_value(self.status.as_str())),
            "groomed" => self.groomed.map(Value::Boolean),
            "snowmaking" => self.snowmaking.map(Value::Boolean),
            "trees" => self.trees.map(Value::Boolean),
            "night" => self.night.map(Value::Boolean),
            _ => None,
        }
    }
}

fn enum_value(item: &str) -> Value {
    Value::Enum(Name::new(item))
}

/// Field that reads the identically-named stored attribute of the parent
pub fn stored_field<R: Record>(name: &str, type_ref: TypeRef) -> Field {
    let attribute = name.to_string();

    Field::new(name, type_ref, move |ctx: ResolverContext| {
        let attribute = attribute.clone();

        FieldFuture::new(async move {
            let parent = ctx.parent_value.try_downcast_ref::<R>()?;
            Ok(parent.attribute(&attribute).map(FieldValue::value))
        })
    })
}

/// Wrap lifts as GraphQL list items
pub fn lift_list<'a>(lifts: impl IntoIterator<Item = &'a Lift>) -> FieldValue<'static> {
    FieldValue::list(lifts.into_iter().cloned().map(FieldValue::owned_any))
}

/// Wrap trails as GraphQL list items
pub fn trail_list<'a>(trails: impl IntoIterator<Item = &'a Trail>) -> FieldValue<'static> {
    FieldValue::list(trails.into_iter().cloned().map(FieldValue::owned_any))
}

/// The `Lift` object type
pub fn lift_object() -> Object {
    let stored = [
        ("id", TypeRef::named_nn(TypeRef::ID)),
        ("name", TypeRef::named_nn(TypeRef::STRING)),
        ("status", TypeRef::named(LIFT_STATUS)),
        ("capacity", TypeRef::named_nn(TypeRef::INT)),
        ("night", TypeRef::named(TypeRef::BOOLEAN)),
        ("elevationGain", TypeRef::named_nn(TypeRef::INT)),
    ];

    let object = stored
        .into_iter()
        .fold(Object::new(LIFT), |object, (name, type_ref)| {
            object.field(stored_field::<Lift>(name, type_ref))
        });

    object.field(
        Field::new("trailAccess", TypeRef::named_list(TRAIL), |ctx| {
            FieldFuture::new(async move {
                let lift = ctx.parent_value.try_downcast_ref::<Lift>()?;
                let resolvers = ctx.data::<Resolvers>()?;
                Ok(Some(trail_list(resolvers.trail_access(lift))))
            })
        })
        .description("Trails reachable from this lift"),
    )
}

/// The `Trail` object type
pub fn trail_object() -> Object {
    let stored = [
        ("id", TypeRef::named_nn(TypeRef::ID)),
        ("name", TypeRef::named_nn(TypeRef::STRING)),
        ("lift", TypeRef::named_nn_list_nn(TypeRef::STRING)),
        ("difficulty", TypeRef::named_nn(DIFFICULTY)),
        ("status", TypeRef::named_nn(TRAIL_STATUS)),
        ("groomed", TypeRef::named(TypeRef::BOOLEAN)),
        ("snowmaking", TypeRef::named(TypeRef::BOOLEAN)),
        ("trees", TypeRef::named(TypeRef::BOOLEAN)),
        ("night", TypeRef::named(TypeRef::BOOLEAN)),
    ];

    let object = stored
        .into_iter()
        .fold(Object::new(TRAIL), |object, (name, type_ref)| {
            object.field(stored_field::<Trail>(name, type_ref))
        });

    object.field(
        Field::new("accessedByLifts", TypeRef::named_nn_list_nn(LIFT), |ctx| {
            FieldFuture::new(async move {
                let trail = ctx.parent_value.try_downcast_ref::<Trail>()?;
                let resolvers = ctx.data::<Resolvers>()?;
                Ok(Some(lift_list(resolvers.accessed_by_lifts(trail))))
            })
        })
        .description("Lifts that reach this trail"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Difficulty, LiftStatus, TrailStatus};

    fn summit() -> Lift {
        Lift {
            id: "summit".to_string(),
            name: "Summit".to_string(),
            status: Some(LiftStatus::Hold),
            capacity: 4,
            night: None,
            elevation_gain: 1820,
            trails: vec!["ice-streak".to_string()],
        }
    }

    #[test]
    fn test_lift_attributes() {
        let lift = summit();
        assert_eq!(lift.attribute("id"), Some(Value::String("summit".to_string())));
        assert_eq!(lift.attribute("status"), Some(Value::Enum(Name::new("HOLD"))));
        assert_eq!(lift.attribute("elevationGain"), Some(Value::Number(1820.into())));
        assert_eq!(lift.attribute("night"), None);
    }

    #[test]
    fn test_internal_trail_list_is_not_an_attribute() {
        assert_eq!(summit().attribute("trails"), None);
        assert_eq!(summit().attribute("elevation_gain"), None);
    }

    #[test]
    fn test_trail_attributes() {
        let trail = Trail {
            id: "sunset".to_string(),
            name: "Sunset".to_string(),
            lift: vec!["jolly-roger".to_string(), "whirlybird".to_string()],
            difficulty: Difficulty::Beginner,
            status: TrailStatus::Open,
            groomed: Some(true),
            snowmaking: Some(false),
            trees: None,
            night: Some(true),
        };

        assert_eq!(
            trail.attribute("lift"),
            Some(Value::List(vec![
                Value::String("jolly-roger".to_string()),
                Value::String("whirlybird".to_string()),
            ]))
        );
        assert_eq!(trail.attribute("difficulty"), Some(Value::Enum(Name::new("beginner"))));
        assert_eq!(trail.attribute("status"), Some(Value::Enum(Name::new("OPEN"))));
        assert_eq!(trail.attribute("snowmaking"), Some(Value::Boolean(false)));
        assert_eq!(trail.attribute("trees"), None);
    }

    #[test]
    fn test_object_type_names() {
        assert_eq!(lift_object().type_name(), LIFT);
        assert_eq!(trail_object().type_name(), TRAIL);
    }
}
