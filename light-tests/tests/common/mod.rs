//! Mock-Kollaborateure für die Host-Tests

#![allow(dead_code)]

use embassy_time::{Duration, Timer};
use light_core::{
    AudioCue, AudioPlayer, LedError, Navigator, PageSession, PageView, PageVisual, SmartLedWriter,
};
use rgb::RGB8;

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    /// Alle erfolgreich geschriebenen Farben in Reihenfolge
    pub colors: Vec<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_color(&self) -> Option<RGB8> {
        self.colors.last().copied()
    }
}

impl SmartLedWriter for MockLedWriter {
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.colors.push(color);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Audio Player
// ============================================================================

#[derive(Default)]
pub struct MockAudioPlayer {
    /// Vollständig abgespielte Ansagen
    pub played: Vec<AudioCue>,
    /// Tondauer je Ansage; null spielt sofort ab
    pub tone: Duration,
    pub sounding: bool,
    pub silenced: usize,
}

impl MockAudioPlayer {
    pub fn with_tone(tone: Duration) -> Self {
        Self {
            tone,
            ..Self::default()
        }
    }
}

impl AudioPlayer for MockAudioPlayer {
    async fn play(&mut self, cue: AudioCue) {
        if self.tone > Duration::from_ticks(0) {
            self.sounding = true;
            Timer::after(self.tone).await;
            self.sounding = false;
        }
        self.played.push(cue);
    }

    fn silence(&mut self) {
        self.sounding = false;
        self.silenced += 1;
    }
}

// ============================================================================
// Mock View / Navigator
// ============================================================================

#[derive(Default)]
pub struct MockPageView {
    pub editing: bool,
    pub renders: Vec<PageVisual>,
}

impl MockPageView {
    pub fn last(&self) -> Option<&PageVisual> {
        self.renders.last()
    }
}

impl PageView for MockPageView {
    fn set_editing(&mut self, editing: bool) {
        self.editing = editing;
    }

    fn render(&mut self, visual: &PageVisual) {
        self.renders.push(*visual);
    }
}

#[derive(Default)]
pub struct MockNavigator {
    pub menu_calls: usize,
}

impl Navigator for MockNavigator {
    fn goto_parent_menu(&mut self) {
        self.menu_calls += 1;
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub type TestMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
pub type TestSession = PageSession<TestMutex>;
pub type TestPage = light_core::PageController<MockLedWriter, MockPageView, MockNavigator>;

pub fn new_page() -> TestPage {
    TestPage::new(
        MockLedWriter::new(),
        MockPageView::default(),
        MockNavigator::default(),
    )
}

/// Spielt alle anstehenden Ansagen ab (wie der Ansage-Task)
pub fn drain_voice(session: &TestSession, audio: &mut MockAudioPlayer) {
    let voice = session.voice();
    while let Some(cue) = voice.try_next_cue() {
        embassy_futures::block_on(audio.play(cue));
    }
}
