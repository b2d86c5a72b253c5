use crate::cargo::ContainerClass;

/// What a container shows when asked about.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerInfo {
    pub number: String,
    pub class: ContainerClass,
    pub load_capacity: f64,
    pub current_weight: f64,
}

/// Ship limits next to what the ship currently carries.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipInfo {
    pub max_speed: f64,
    pub max_containers: usize,
    pub max_weight: f64,
    pub container_count: usize,
    pub current_weight: f64,
}

impl ShipInfo {
    pub fn free_slots(&self) -> usize {
        self.max_containers.saturating_sub(self.container_count)
    }

    /// Weight still accepted before the limit; zero once the ship is over it.
    pub fn spare_weight(&self) -> f64 {
        (self.max_weight - self.current_weight).max(0.0)
    }
}
