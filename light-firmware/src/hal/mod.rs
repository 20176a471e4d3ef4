// Hardware Abstraction Layer (HAL) Module
//
// Implementierungen der Kollaborateur-Traits aus light-core
// für das ESP32-C6 Board.

pub mod buzzer;
pub mod led_writer;
pub mod navigator;
pub mod view;

pub use buzzer::BuzzerAudioPlayer;
pub use led_writer::RmtLedWriter;
pub use navigator::MenuNavigator;
pub use view::LogPageView;
