// Navigator - Wechsel zwischen Lichtseite und übergeordnetem Menü

use defmt::info;
use light_core::Navigator;

#[derive(Default)]
pub struct MenuNavigator {
    in_menu: bool,
}

impl MenuNavigator {
    pub const fn new() -> Self {
        Self { in_menu: false }
    }

    /// Ob gerade das übergeordnete Menü angezeigt wird
    pub fn in_menu(&self) -> bool {
        self.in_menu
    }

    /// Menü verlassen und die Lichtseite wieder öffnen
    pub fn open_page(&mut self) {
        info!("Navigation: menu -> light page");
        self.in_menu = false;
    }
}

impl Navigator for MenuNavigator {
    fn goto_parent_menu(&mut self) {
        info!("Navigation: light page -> menu");
        self.in_menu = true;
    }
}
