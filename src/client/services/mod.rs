pub mod analysis_service;
