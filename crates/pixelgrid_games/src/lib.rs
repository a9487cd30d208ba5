pub mod counters;
pub mod fruit;
pub mod lights_out;

pub use counters::CountersApp;
pub use fruit::FruitApp;
pub use lights_out::LightsOutApp;
