pub mod simulations;

pub use simulations::simulation_routes;
