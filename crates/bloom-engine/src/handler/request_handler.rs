//! Request handler for the filter routes
//!
//! Validation rules:
//! - `add` and `check` require a non-empty `item`; absence is a client error
//! - a non-text `item` reaches the engine boundary and is a server error
//! - `clear` and `stats` take no parameters
//!
//! An HTTP front end maps `POST /api/add`, `GET /api/check?item=`,
//! `DELETE /api/clear` and `GET /api/stats` onto [`FilterRoute`] values and
//! answers with [`FilterReply::status`] and [`FilterReply::body`].

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::{FilterError, ReplyStatus, RequestError};
use crate::events::{
    item_param, AddItemResponse, CheckItemResponse, ClearResponse, ErrorResponse, FilterRoute,
};
use crate::ports::MembershipFilterApi;

/// Reply to one request
#[derive(Clone, Debug, PartialEq)]
pub struct FilterReply {
    pub status: ReplyStatus,
    pub body: Value,
}

impl FilterReply {
    fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self {
                status: ReplyStatus::Ok,
                body,
            },
            Err(e) => {
                let err = FilterError::Serialization(e.to_string());
                Self::failure(err.into(), "Failed to encode response")
            }
        }
    }

    fn failure(err: RequestError, context: &str) -> Self {
        let status = err.status();
        let response = match status {
            ReplyStatus::ServerError => ErrorResponse {
                error: context.to_string(),
                details: Some(err.details()),
            },
            _ => ErrorResponse {
                error: err.to_string(),
                details: None,
            },
        };

        // Strings only, encoding cannot fail
        Self {
            status,
            body: serde_json::to_value(&response).unwrap_or_default(),
        }
    }
}

/// Handles filter requests against a shared filter
pub struct FilterRequestHandler<A: MembershipFilterApi> {
    api: Arc<A>,
}

impl<A: MembershipFilterApi> Clone for FilterRequestHandler<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<A: MembershipFilterApi> FilterRequestHandler<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Dispatch by route name, e.g. from a path segment
    pub fn handle_named(&self, route: &str, params: &Value) -> FilterReply {
        match route.parse::<FilterRoute>() {
            Ok(route) => self.handle(route, params),
            Err(e) => {
                warn!(route, "Unknown route");
                FilterReply::failure(e, "Unknown route")
            }
        }
    }

    /// Handle one request
    ///
    /// `params` is the JSON body for `add` and the query parameters for `check`.
    pub fn handle(&self, route: FilterRoute, params: &Value) -> FilterReply {
        debug!(%route, "Handling filter request");

        let result = match route {
            FilterRoute::Add => self.handle_add(params),
            FilterRoute::Check => self.handle_check(params),
            FilterRoute::Clear => self.handle_clear(),
            FilterRoute::Stats => Ok(FilterReply::ok(&self.api.stats())),
        };

        result.unwrap_or_else(|e| {
            let context = failure_context(route);
            match e.status() {
                ReplyStatus::ServerError => error!(%route, error = %e, "{}", context),
                _ => warn!(%route, error = %e, "Request rejected"),
            }
            FilterReply::failure(e, context)
        })
    }

    fn handle_add(&self, params: &Value) -> Result<FilterReply, RequestError> {
        let item = item_param(params)?;
        let stats = self.api.add_item(item);

        Ok(FilterReply::ok(&AddItemResponse {
            success: true,
            message: format!("Added \"{item}\" to the filter"),
            stats,
        }))
    }

    fn handle_check(&self, params: &Value) -> Result<FilterReply, RequestError> {
        let item = item_param(params)?;
        let outcome = self.api.check_item(item);

        Ok(FilterReply::ok(&CheckItemResponse {
            exists: outcome.exists,
            false_positive_rate: outcome.false_positive_rate,
            stats: outcome.stats,
        }))
    }

    fn handle_clear(&self) -> Result<FilterReply, RequestError> {
        let stats = self.api.clear();

        Ok(FilterReply::ok(&ClearResponse {
            success: true,
            message: "Bloom filter has been cleared".to_string(),
            stats,
        }))
    }
}

fn failure_context(route: FilterRoute) -> &'static str {
    match route {
        FilterRoute::Add => "Failed to add item",
        FilterRoute::Check => "Failed to check item",
        FilterRoute::Clear => "Failed to clear filter",
        FilterRoute::Stats => "Failed to get stats",
    }
}
