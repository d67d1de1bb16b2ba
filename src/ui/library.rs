//! Eingebaute Bauteil-Vorlagen für die Seitenleiste.

use crate::core::{ComponentTemplate, PinKind, PinTemplate};

fn pins(entries: &[(&str, PinKind)]) -> Vec<PinTemplate> {
    entries
        .iter()
        .map(|(label, kind)| PinTemplate {
            label: (*label).to_string(),
            kind: *kind,
        })
        .collect()
}

/// Standard-Bibliothek in Anzeigereihenfolge
pub fn builtin_templates() -> Vec<ComponentTemplate> {
    use PinKind::{Ground, Power, Signal};
    vec![
        ComponentTemplate {
            name: "R1".into(),
            component_type: "Resistor".into(),
            pins: pins(&[("1", Signal), ("2", Signal)]),
        },
        ComponentTemplate {
            name: "C1".into(),
            component_type: "Capacitor".into(),
            pins: pins(&[("+", Signal), ("-", Ground)]),
        },
        ComponentTemplate {
            name: "LED1".into(),
            component_type: "LED".into(),
            pins: pins(&[("A", Signal), ("K", Ground)]),
        },
        ComponentTemplate {
            name: "LM7805".into(),
            component_type: "Regulator".into(),
            pins: pins(&[("IN", Power), ("GND", Ground), ("OUT", Power)]),
        },
        ComponentTemplate {
            name: "ESP32".into(),
            component_type: "MCU".into(),
            pins: pins(&[
                ("3V3", Power),
                ("GND", Ground),
                ("IO2", Signal),
                ("IO4", Signal),
                ("TX", Signal),
                ("RX", Signal),
            ]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_names_are_unique() {
        let templates = builtin_templates();
        let mut names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), templates.len());
    }
}
