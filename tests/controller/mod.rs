mod film;
mod user;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use holocron::model::app::AppState;
use holocron_test_utils::prelude::*;

use crate::util::body_json;
