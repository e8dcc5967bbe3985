pub mod demand_forecast;
pub mod engine_settings;
pub mod location;
pub mod notification;
pub mod product;
pub mod replenishment_suggestion;
pub mod safety_stock_rule;
pub mod shipping_route;
pub mod stock_batch;
pub mod supplier;
pub mod transfer;
