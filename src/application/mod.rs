pub mod estimate_service;
