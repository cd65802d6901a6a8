// Career prediction over the fitted pipeline: single label and top-k ranking.

pub mod handlers;
pub mod service;
