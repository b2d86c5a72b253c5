use crate::terminal::colors;
use colored::*;
use stowr_common::cargo::{ContainerClass, ContainerKind};
use stowr_common::fleet::{ContainerInfo, ShipInfo};

pub type Detail = (String, ColoredString);

pub fn weight(kg: f64) -> String {
    format!("{kg} kg")
}

pub fn class_to_value(class: ContainerClass) -> ColoredString {
    let color = if class.is_hazardous() {
        colors::HAZARD
    } else {
        colors::SAFE
    };
    class.as_str().color(color)
}

pub fn container_to_details(info: &ContainerInfo) -> Vec<Detail> {
    vec![
        ("Type".to_string(), class_to_value(info.class)),
        (
            "Capacity".to_string(),
            weight(info.load_capacity).color(colors::LIMIT),
        ),
        (
            "Weight".to_string(),
            weight(info.current_weight).color(colors::WEIGHT),
        ),
    ]
}

/// Readings that only some container types carry.
pub fn kind_to_details(kind: &ContainerKind) -> Vec<Detail> {
    match kind {
        ContainerKind::Liquid { pressure } | ContainerKind::Gas { pressure } => {
            vec![("Pressure".to_string(), pressure.to_string().color(colors::LIMIT))]
        }
        ContainerKind::Refrigerated {
            temperature,
            product_type,
        } => vec![
            (
                "Temp".to_string(),
                temperature.to_string().color(colors::LIMIT),
            ),
            (
                "Product".to_string(),
                product_type.as_str().color(colors::TEXT_DEFAULT),
            ),
        ],
    }
}

pub fn ship_to_details(info: &ShipInfo) -> Vec<Detail> {
    let slots: String = format!("{}/{}", info.container_count, info.max_containers);
    let load: String = format!("{} / {}", weight(info.current_weight), weight(info.max_weight));
    vec![
        (
            "Speed".to_string(),
            format!("{} kn", info.max_speed).color(colors::LIMIT),
        ),
        ("Slots".to_string(), slots.color(colors::LIMIT)),
        ("Load".to_string(), load.color(colors::WEIGHT)),
        (
            "Spare".to_string(),
            weight(info.spare_weight()).color(colors::SAFE),
        ),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
