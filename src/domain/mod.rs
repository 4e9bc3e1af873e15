// Domain layer: request/response models and the notification port.

pub mod model;
pub mod ports;
