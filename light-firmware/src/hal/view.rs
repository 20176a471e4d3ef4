// Page View - Darstellung der Lichtseite als Log-Ausgabe
//
// Das Board hat kein Display; die Bildauswahl wird deshalb als
// defmt-Zeile ausgegeben (Hintergrund, Stufen-Grafiken, Beschriftung).

use defmt::{Display2Format, info};
use light_core::{Backdrop, PageView, PageVisual, Tier};

#[derive(Default)]
pub struct LogPageView {
    editing: bool,
}

impl LogPageView {
    pub const fn new() -> Self {
        Self { editing: false }
    }
}

impl PageView for LogPageView {
    fn set_editing(&mut self, editing: bool) {
        if self.editing != editing {
            info!("View: editing {}", if editing { "on" } else { "off" });
        }
        self.editing = editing;
    }

    fn render(&mut self, visual: &PageVisual) {
        // Ein Zeichen pro Stufen-Grafik (25/50/75/100)
        let mut bar = [b'.'; 4];
        for tier in &Tier::ALL[1..] {
            if visual.is_lit(*tier) {
                bar[tier.index() - 1] = b'#';
            }
        }
        let bar = core::str::from_utf8(&bar).unwrap_or("????");

        match visual.backdrop {
            Backdrop::Off => info!(
                "View: [off] [{}] label={} off-marker",
                bar,
                Display2Format(&visual.label)
            ),
            Backdrop::Lit(temp) => info!(
                "View: [{}] [{}] label={}",
                temp.as_str(),
                bar,
                Display2Format(&visual.label)
            ),
        }
    }
}
