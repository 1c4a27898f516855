//! Root `Query` fields
//!
//! Each `create_*_field` function builds one field of the `Query` type. The
//! closures only translate GraphQL arguments and results; the lookups
//! themselves are the [`Resolvers`] operations.

use crate::data::{LiftStatus, TrailStatus};
use crate::error::SnowtoothError;
use crate::schema::enums::{LIFT_STATUS, TRAIL_STATUS};
use crate::schema::objects::{lift_list, trail_list, LIFT, TRAIL};
use crate::schema::resolver::Resolvers;

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputValue, ObjectAccessor, ResolverContext, TypeRef,
    ValueAccessor,
};
use async_graphql::{ErrorExtensions, Value};
use std::str::FromStr;

pub const QUERY: &str = "Query";

/// Every root query field, in schema order
pub fn query_fields() -> Vec<Field> {
    vec![
        create_lift_count_field(),
        create_all_lifts_field(),
        create_find_lift_by_id_field(),
        create_all_trails_field(),
        create_find_trail_by_id_field(),
        create_trail_count_field(),
    ]
}

/// `LiftCount(status: LiftStatus): Int!`
pub fn create_lift_count_field() -> Field {
    Field::new("LiftCount", TypeRef::named_nn(TypeRef::INT), |ctx: ResolverContext| {
        FieldFuture::new(async move {
            let resolvers = ctx.data::<Resolvers>()?;
            let status = optional_enum_argument::<LiftStatus>(&ctx.args, "status")?;

            Ok(Some(count_value(resolvers.lift_count(status))))
        })
    })
    .argument(InputValue::new("status", TypeRef::named(LIFT_STATUS)))
}

/// `allLifts: [Lift!]!`
pub fn create_all_lifts_field() -> Field {
    Field::new("allLifts", TypeRef::named_nn_list_nn(LIFT), |ctx: ResolverContext| {
        FieldFuture::new(async move {
            let resolvers = ctx.data::<Resolvers>()?;
            Ok(Some(lift_list(resolvers.all_lifts())))
        })
    })
}

/// `findLiftById(id: ID!): Lift!`
pub fn create_find_lift_by_id_field() -> Field {
    Field::new("findLiftById", TypeRef::named_nn(LIFT), |ctx: ResolverContext| {
        FieldFuture::new(async move {
            let resolvers = ctx.data::<Resolvers>()?;
            let id = id_argument(&ctx.args, "id")?;

            let lift = resolvers
                .find_lift_by_id(&id)
                .ok_or_else(|| SnowtoothError::LiftNotFound(id.clone()).extend())?;

            Ok(Some(FieldValue::owned_any(lift.clone())))
        })
    })
    .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
}

/// `allTrails(status: TrailStatus): [Trail!]!`
pub fn create_all_trails_field() -> Field {
    Field::new("allTrails", TypeRef::named_nn_list_nn(TRAIL), |ctx: ResolverContext| {
        FieldFuture::new(async move {
            let resolvers = ctx.data::<Resolvers>()?;
            let status = optional_enum_argument::<TrailStatus>(&ctx.args, "status")?;

            Ok(Some(trail_list(resolvers.all_trails(status))))
        })
    })
    .argument(InputValue::new("status", TypeRef::named(TRAIL_STATUS)))
}

/// `findTrailByID(id: ID!): Trail!`
pub fn create_find_trail_by_id_field() -> Field {
    Field::new("findTrailByID", TypeRef::named_nn(TRAIL), |ctx: ResolverContext| {
        FieldFuture::new(async move {
            let resolvers = ctx.data::<Resolvers>()?;
            let id = id_argument(&ctx.args, "id")?;

            let trail = resolvers
                .find_trail_by_id(&id)
                .ok_or_else(|| SnowtoothError::TrailNotFound(id.clone()).extend())?;

            Ok(Some(FieldValue::owned_any(trail.clone())))
        })
    })
    .argument(InputValue::new("id", TypeRef::named_nn(TypeRef::ID)))
}

/// `trailCount(status: TrailStatus!): Int!`
pub fn create_trail_count_field() -> Field {
    Field::new("trailCount", TypeRef::named_nn(TypeRef::INT), |ctx: ResolverContext| {
        FieldFuture::new(async move {
            let resolvers = ctx.data::<Resolvers>()?;
            // Validation rejects the query before this point when `status` is missing
            let status = optional_enum_argument::<TrailStatus>(&ctx.args, "status")?
                .ok_or_else(|| {
                    SnowtoothError::InvalidArgument("status is required".to_string()).extend()
                })?;

            Ok(Some(count_value(resolvers.trail_count(status))))
        })
    })
    .argument(InputValue::new("status", TypeRef::named_nn(TRAIL_STATUS)))
}

fn count_value(count: usize) -> FieldValue<'static> {
    FieldValue::value(Value::Number(count.into()))
}

/// Parse an optional enum argument; absent and explicit `null` both mean "no filter"
fn optional_enum_argument<T>(
    args: &ObjectAccessor<'_>,
    name: &str,
) -> async_graphql::Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    match args.get(name) {
        Some(value) if !value.is_null() => {
            let item = value.enum_name()?;
            T::from_str(item)
                .map(Some)
                .map_err(|e| SnowtoothError::InvalidArgument(e).extend())
        }
        _ => Ok(None),
    }
}

/// Read an `ID` argument, accepting both string and integer literals
fn id_argument(args: &ObjectAccessor<'_>, name: &str) -> async_graphql::Result<String> {
    let value = args.try_get(name)?;
    id_from_accessor(&value).ok_or_else(|| {
        SnowtoothError::InvalidArgument(format!("'{}' must be a string or integer id", name))
            .extend()
    })
}

fn id_from_accessor(value: &ValueAccessor<'_>) -> Option<String> {
    value
        .string()
        .map(str::to_string)
        .ok()
        .or_else(|| value.i64().ok().map(|n| n.to_string()))
}
