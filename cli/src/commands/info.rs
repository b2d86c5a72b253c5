use stowr_common::cargo::ContainerClass;
use stowr_common::cargo::kind::{HAZARD_LOAD_RATIO, RESIDUE_FACTOR};
use stowr_common::config::Config;
use stowr_common::fleet::ShipSpec;

use colored::Colorize;

use crate::terminal::{colors, format, print};

pub fn info(cfg: &Config) {
    let spec = ShipSpec::default();
    print::aligned_line("Max speed", format!("{} kn", spec.max_speed).color(colors::LIMIT));
    print::aligned_line("Max boxes", spec.max_containers.to_string().color(colors::LIMIT));
    print::aligned_line("Max weight", format::weight(spec.max_weight).color(colors::WEIGHT));

    print::header("container types", cfg.quiet);
    for class in ContainerClass::ALL {
        print::aligned_line(class.as_str(), describe(class));
    }
}

fn describe(class: ContainerClass) -> String {
    let half = HAZARD_LOAD_RATIO * 100.0;
    let residue = RESIDUE_FACTOR * 100.0;
    match class {
        ContainerClass::Liquid => format!(
            "pressure; hazard notice above {half}% load when pressurized; keeps {residue}% when emptied"
        ),
        ContainerClass::Gas => {
            format!("pressure; hazard notice above {half}% load; keeps {residue}% when emptied")
        }
        ContainerClass::Refrigerated => "temperature and product type".to_string(),
    }
}
