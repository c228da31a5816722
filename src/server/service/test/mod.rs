use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::error::{
    constraint::{ConstraintError, ReferenceKind},
    AppError,
};


/// Unwraps the classified constraint error of a failed service call.
fn expect_constraint<T: std::fmt::Debug>(result: Result<T, AppError>) -> ConstraintError {
    match result {
        Err(AppError::ConstraintErr(err)) => err,
        other => panic!("expected constraint error, got {:?}", other),
    }
}
