use std::fmt;

use crate::dashboard::Render;
use crate::model::{format_number, ProductRecord};

pub const PASSPORT_TITLE: &str = "Digital Product Passport";
pub const SCAN_ACTION_LABEL: &str = "Scan New Product";
pub const SCANNER_NOTICE_TITLE: &str = "Scanner Active";
pub const SCANNER_NOTICE_BODY: &str = "Position the QR code within the scanner frame...";
pub const ERROR_HEADING: &str = "Error";
pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialLine {
    pub name: String,
    pub share: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassportLayout {
    pub product_name: String,
    pub identity: [LabeledValue; 2],
    pub carbon_footprint: String,
    pub materials: Vec<MaterialLine>,
    pub repair_score: String,
    pub current_location: String,
    pub history: Vec<String>,
    pub recycling_instructions: String,
}

impl PassportLayout {
    pub fn from_record(record: &ProductRecord) -> Self {
        Self {
            product_name: record.name.clone(),
            identity: [
                LabeledValue {
                    label: "Product ID",
                    value: record.id.to_string(),
                },
                LabeledValue {
                    label: "Manufacturer",
                    value: record.manufacturer.clone(),
                },
            ],
            carbon_footprint: record.carbon_footprint.to_string(),
            materials: record
                .materials
                .iter()
                .map(|material| MaterialLine {
                    name: material.name.clone(),
                    share: format_percentage(material.percentage),
                })
                .collect(),
            repair_score: format_repair_score(record.repair_score),
            current_location: record.location.current.clone(),
            history: record.location.history.clone(),
            recycling_instructions: record.recycling_instructions.clone(),
        }
    }
}

pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_number(value))
}

pub fn format_repair_score(value: f64) -> String {
    format!("{}/10", format_number(value))
}

impl fmt::Display for PassportLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PASSPORT_TITLE}")?;
        writeln!(f)?;
        writeln!(f, "{}", self.product_name)?;
        for field in &self.identity {
            writeln!(f, "  {}: {}", field.label, field.value)?;
        }
        writeln!(f)?;
        writeln!(f, "Sustainability")?;
        writeln!(f, "  {} (Carbon Footprint)", self.carbon_footprint)?;
        writeln!(f, "Materials")?;
        for material in &self.materials {
            writeln!(f, "  {}: {}", material.name, material.share)?;
        }
        writeln!(f, "Repairability")?;
        writeln!(f, "  {} (Repair Score)", self.repair_score)?;
        writeln!(f)?;
        writeln!(f, "Product Journey")?;
        writeln!(f, "  Current Location: {}", self.current_location)?;
        for stop in &self.history {
            writeln!(f, "  - {stop}")?;
        }
        writeln!(f)?;
        writeln!(f, "End-of-Life Instructions")?;
        write!(f, "  {}", self.recycling_instructions)
    }
}

pub fn render_text(render: Render<'_>) -> String {
    match render {
        Render::Error { message } => format!("{ERROR_HEADING}\n{message}"),
        Render::Loading => LOADING_TEXT.to_string(),
        Render::Passport { record, scanning } => {
            let layout = PassportLayout::from_record(record);
            if scanning {
                format!("{SCANNER_NOTICE_TITLE}\n{SCANNER_NOTICE_BODY}\n\n{layout}")
            } else {
                layout.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::dashboard::{Dashboard, FetchFailure, FetchSettled};
    use crate::model::{CarbonFootprint, Location, Material, ProductId};

    fn record() -> ProductRecord {
        ProductRecord {
            id: ProductId::new("PRD123456"),
            name: "EcoPhone X".to_string(),
            manufacturer: "GreenTech Industries".to_string(),
            carbon_footprint: CarbonFootprint::Text("45.2 kg CO2e".to_string()),
            repair_score: 8.5,
            materials: vec![
                Material {
                    name: "Recycled Aluminum".to_string(),
                    percentage: 35.0,
                },
                Material {
                    name: "Glass".to_string(),
                    percentage: 25.5,
                },
                Material {
                    name: "Recycled Aluminum".to_string(),
                    percentage: 60.0,
                },
            ],
            location: Location {
                current: "Berlin Distribution Center".to_string(),
                history: vec![
                    "Shenzhen Factory".to_string(),
                    "Rotterdam Port".to_string(),
                    "Shenzhen Factory".to_string(),
                ],
            },
            recycling_instructions: "Return to any certified e-waste point.\nDo not burn."
                .to_string(),
        }
    }

    #[test]
    fn layout_copies_fields_and_applies_templates() {
        let layout = PassportLayout::from_record(&record());

        assert_eq!(layout.product_name, "EcoPhone X");
        assert_eq!(layout.identity[0].value, "PRD123456");
        assert_eq!(layout.identity[1].value, "GreenTech Industries");
        assert_eq!(layout.carbon_footprint, "45.2 kg CO2e");
        assert_eq!(layout.repair_score, "8.5/10");
        assert_eq!(
            layout
                .materials
                .iter()
                .map(|line| (line.name.as_str(), line.share.as_str()))
                .collect::<Vec<_>>(),
            vec![
                ("Recycled Aluminum", "35%"),
                ("Glass", "25.5%"),
                ("Recycled Aluminum", "60%"),
            ]
        );
        assert_eq!(
            layout.history,
            vec!["Shenzhen Factory", "Rotterdam Port", "Shenzhen Factory"]
        );
        assert_eq!(
            layout.recycling_instructions,
            "Return to any certified e-waste point.\nDo not burn."
        );
    }

    #[test]
    fn tiny_and_huge_values_use_exponent_form() {
        assert_eq!(format_percentage(1e-7), "1e-7%");
        assert_eq!(format_percentage(12.5), "12.5%");
        assert_eq!(format_repair_score(1e21), "1e+21/10");
    }

    #[test]
    fn empty_collections_render_without_entries() {
        let mut record = record();
        record.materials.clear();
        record.location.history.clear();

        let text = PassportLayout::from_record(&record).to_string();

        assert!(text.contains("Materials\nRepairability"));
        assert!(text.contains("Current Location: Berlin Distribution Center\n\nEnd-of-Life"));
        assert!(!text.contains("  - "));
    }

    #[test]
    fn passport_text_contains_every_field_in_order() {
        let text = render_text(Render::Passport {
            record: &record(),
            scanning: false,
        });

        let expected = [
            "EcoPhone X",
            "PRD123456",
            "GreenTech Industries",
            "45.2 kg CO2e",
            "Recycled Aluminum: 35%",
            "Glass: 25.5%",
            "8.5/10",
            "Berlin Distribution Center",
            "- Shenzhen Factory",
            "- Rotterdam Port",
            "Return to any certified e-waste point.",
        ];
        let mut cursor = 0;
        for needle in expected {
            let found = text[cursor..]
                .find(needle)
                .unwrap_or_else(|| panic!("{needle} missing after offset {cursor}"));
            cursor += found + needle.len();
        }
        assert!(!text.contains(SCANNER_NOTICE_TITLE));
    }

    #[test]
    fn scanning_notice_precedes_passport() {
        let text = render_text(Render::Passport {
            record: &record(),
            scanning: true,
        });

        assert!(text.starts_with(SCANNER_NOTICE_TITLE));
        assert!(text.contains(PASSPORT_TITLE));
    }

    #[test]
    fn error_text_hides_held_record() {
        let config = DashboardConfig::default();
        let mut dashboard = Dashboard::new();
        let mount = dashboard.mount(&config);
        dashboard.settle(FetchSettled {
            ticket: mount,
            result: Ok(record()),
        });
        let scan = dashboard.begin_scan(&config);
        dashboard.settle(FetchSettled {
            ticket: scan,
            result: Err(FetchFailure {
                message: "Failed to fetch product".to_string(),
                detail: "GET http://localhost:8080/products/PRD789012 returned HTTP 503."
                    .to_string(),
            }),
        });

        let text = render_text(dashboard.render());

        assert!(dashboard.record().is_some());
        assert_eq!(text, "Error\nFailed to fetch product");
        assert!(!text.contains("EcoPhone X"));
    }

    #[test]
    fn loading_text_before_first_result() {
        assert_eq!(render_text(Dashboard::new().render()), LOADING_TEXT);
    }
}
