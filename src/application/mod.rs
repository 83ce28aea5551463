// Application layer - Use cases over the repository trait
pub mod sensor_repository;
pub mod weather_service;
