//! Events Layer - request parameters and response shapes of the request layer

pub mod requests;
pub mod responses;

pub use requests::{item_param, FilterRoute};
pub use responses::{
    AddItemResponse, CheckItemResponse, ClearResponse, ErrorResponse, FilterConfiguration,
    FilterStats,
};
