//! Dashboard application model (Elm architecture).

use std::io;

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::{Frame, Terminal};
use warroom_core::orientation::try_lock_landscape;
use warroom_core::{
    pointer_to_geo, Blink, Clock, ConflictZone, Dataset, GeoPoint, LayoutMode, PollState,
    ScanLine, Selection, Sweep, TerminalHost, TimerKind, TimerSettings,
};

use crate::dialog::{dialog_rect, render_dialog};
use crate::footer::render_footer;
use crate::header::render_header;
use crate::hud::render_hud_overlay;
use crate::intel::{render_feed, FeedScroll};
use crate::keymap::{map_key, map_mouse, KeyAction, PointerEvent};
use crate::map::{self, render_map, MapView};
use crate::messages::{DashboardMessage, SystemMetrics};
use crate::metrics::MetricsSampler;
use crate::poll::{option_at, poll_inner, render_poll};
use crate::radar::{self, render_radar, RadarView};
use crate::status::{render_developments, render_global_status};
use crate::styles::ColorTheme;
use crate::tabs::{render_tabs, tab_at, Tab};
use crate::threats::render_threats;
use crate::timers::TimerSet;

/// Briefings skipped per page in the intel feed.
const FEED_PAGE: usize = 3;

/// Top-level screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub header: Rect,
    pub tabs: Rect,
    pub body: Rect,
    pub footer: Rect,
}

/// Regions of the tactical tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TacticalLayout {
    pub map: Rect,
    pub radar: Rect,
    pub status: Rect,
    pub developments: Rect,
}

/// Options for the interactive loop.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub timers: TimerSettings,
    /// Capture mouse events for hover and click.
    pub mouse: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            timers: TimerSettings::default(),
            mouse: true,
        }
    }
}

/// Dashboard state (Elm Model).
pub struct DashboardApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    data: Dataset,
    /// Message receiver fed by timers and the metrics sampler.
    rx: Receiver<DashboardMessage>,
    /// Active panel.
    pub tab: Tab,
    /// Detail dialog state.
    pub selection: Selection,
    /// Vote state of the daily poll.
    pub poll: PollState,
    /// Keyboard-highlighted poll option.
    pub poll_cursor: usize,
    /// Keyboard-focused conflict marker.
    pub focused_zone: usize,
    /// Synthetic coordinates under the pointer, while it is over the map.
    pub pointer: Option<GeoPoint>,
    pub scan_line: ScanLine,
    pub sweep: Sweep,
    pub blink: Blink,
    pub clock: Clock,
    pub layout_mode: LayoutMode,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    pub feed_scroll: FeedScroll,
    /// Latest host sample.
    pub metrics: SystemMetrics,
}

impl DashboardApp {
    /// Create a dashboard over `data`.
    #[must_use]
    pub fn new(data: Dataset, rx: Receiver<DashboardMessage>) -> Self {
        let (terminal_width, terminal_height) = (120, 40);
        Self {
            should_quit: false,
            data,
            rx,
            tab: Tab::default(),
            selection: Selection::default(),
            poll: PollState::new(),
            poll_cursor: 0,
            focused_zone: 0,
            pointer: None,
            scan_line: ScanLine::default(),
            sweep: Sweep::default(),
            blink: Blink::default(),
            clock: Clock::now(),
            layout_mode: LayoutMode::from_viewport(terminal_width, terminal_height),
            terminal_width,
            terminal_height,
            feed_scroll: FeedScroll::new(),
            metrics: SystemMetrics {
                cpu_percent: 0.0,
                memory_percent: 0.0,
            },
        }
    }

    /// The dataset being shown.
    #[must_use]
    pub fn data(&self) -> &Dataset {
        &self.data
    }

    /// Zone shown in the dialog, if one is open.
    #[must_use]
    pub fn selected_zone(&self) -> Option<&ConflictZone> {
        self.selection
            .current()
            .and_then(|id| self.data.zones.by_id(id))
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: DashboardMessage) {
        match msg {
            DashboardMessage::Tick(kind) => self.handle_tick(kind),
            DashboardMessage::Key(action) => self.handle_key_action(action),
            DashboardMessage::Pointer(event) => self.handle_pointer(event),
            DashboardMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                let mode = LayoutMode::from_viewport(width, height);
                if mode != self.layout_mode {
                    tracing::debug!(?mode, width, height, "layout mode changed");
                }
                self.layout_mode = mode;
            }
            DashboardMessage::SystemMetrics(metrics) => {
                self.metrics = metrics;
            }
            DashboardMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Step the animation state owned by `kind`.
    pub fn handle_tick(&mut self, kind: TimerKind) {
        match kind {
            TimerKind::Clock => self.clock.refresh(),
            TimerKind::ScanLine => self.scan_line.advance(),
            TimerKind::Sweep => self.sweep.advance(),
            TimerKind::Blink => self.blink.toggle(),
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::Back => {
                if self.selection.is_open() {
                    self.selection.close();
                } else {
                    self.should_quit = true;
                }
            }
            KeyAction::NextTab => self.tab = self.tab.next(),
            KeyAction::PrevTab => self.tab = self.tab.prev(),
            KeyAction::SelectTab(index) => {
                if let Some(tab) = Tab::from_index(index) {
                    self.tab = tab;
                }
            }
            // The dialog is modal for everything else.
            _ if self.selection.is_open() => {}
            KeyAction::Left | KeyAction::Right if self.tab == Tab::Tactical => {
                self.cycle_focus(action == KeyAction::Right);
            }
            KeyAction::Activate => match self.tab {
                Tab::Tactical => self.open_focused(),
                Tab::Polls => {
                    self.vote(self.poll_cursor);
                }
                Tab::Threats | Tab::Intel => {}
            },
            KeyAction::Up | KeyAction::Down if self.tab == Tab::Polls => {
                self.move_poll_cursor(action == KeyAction::Down);
            }
            KeyAction::Up if self.tab == Tab::Intel => self.feed_scroll.scroll_up(),
            KeyAction::Down if self.tab == Tab::Intel => {
                self.feed_scroll.scroll_down(self.data.briefings.len());
            }
            KeyAction::PageUp if self.tab == Tab::Intel => self.feed_scroll.page_up(FEED_PAGE),
            KeyAction::PageDown if self.tab == Tab::Intel => {
                self.feed_scroll
                    .page_down(FEED_PAGE, self.data.briefings.len());
            }
            KeyAction::Home if self.tab == Tab::Intel => self.feed_scroll.home(),
            KeyAction::End if self.tab == Tab::Intel => {
                self.feed_scroll.end(self.data.briefings.len());
            }
            _ => {}
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let len = self.data.zones.len();
        if len == 0 {
            return;
        }
        self.focused_zone = if forward {
            (self.focused_zone + 1) % len
        } else {
            (self.focused_zone + len - 1) % len
        };
    }

    fn open_focused(&mut self) {
        let id = self
            .data
            .zones
            .zones()
            .get(self.focused_zone)
            .map(|zone| zone.id.clone());
        if let Some(id) = id {
            self.open_zone(id);
        }
    }

    /// Open the dialog on `zone_id`.
    pub fn open_zone(&mut self, zone_id: String) {
        tracing::info!(zone = %zone_id, "opening conflict dialog");
        self.selection.select(zone_id);
    }

    fn move_poll_cursor(&mut self, down: bool) {
        if self.poll.is_submitted() {
            return;
        }
        let count = self.data.daily_poll().map_or(0, |p| p.options.len());
        if count == 0 {
            return;
        }
        self.poll_cursor = if down {
            (self.poll_cursor + 1).min(count - 1)
        } else {
            self.poll_cursor.saturating_sub(1)
        };
    }

    /// Vote for option `index` of the daily poll. Returns whether it counted.
    pub fn vote(&mut self, index: usize) -> bool {
        let Some(poll) = self.data.daily_poll() else {
            return false;
        };
        let Some(option) = poll.options.get(index) else {
            return false;
        };
        self.poll.submit_vote(poll, &option.id)
    }

    /// Handle a pointer move or click at a terminal cell.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.layout_mode.is_portrait() {
            return;
        }
        let screen = Rect::new(0, 0, self.terminal_width, self.terminal_height);
        let layout = Self::compute_layout(screen);

        match event {
            PointerEvent::Move { column, row } => {
                self.pointer = None;
                if self.tab != Tab::Tactical || self.selection.is_open() {
                    return;
                }
                let inner = map::map_inner(Self::compute_tactical_layout(layout.body).map);
                if let Some((fx, fy)) = map::fraction_in(inner, column, row) {
                    self.pointer = Some(pointer_to_geo(fx, fy));
                }
            }
            PointerEvent::Click { column, row } => {
                if self.selection.is_open() {
                    if !contains(dialog_rect(layout.body), column, row) {
                        self.selection.close();
                    }
                    return;
                }
                if let Some(tab) = tab_at(layout.tabs, column, row) {
                    self.tab = tab;
                    return;
                }
                match self.tab {
                    Tab::Tactical => self.click_tactical(layout.body, column, row),
                    Tab::Polls => {
                        let options = self.data.daily_poll().map_or(0, |p| p.options.len());
                        if let Some(index) = option_at(poll_inner(layout.body), options, column, row)
                        {
                            self.poll_cursor = index;
                            self.vote(index);
                        }
                    }
                    Tab::Threats | Tab::Intel => {}
                }
            }
        }
    }

    fn click_tactical(&mut self, body: Rect, column: u16, row: u16) {
        let tactical = Self::compute_tactical_layout(body);

        let map_inner = map::map_inner(tactical.map);
        let radar_inner = radar::radar_inner(tactical.radar);
        let hit = if contains(map_inner, column, row) {
            map::zone_at(map_inner, &self.data.zones, column, row)
                .map(|zone| zone.id.clone())
                .or_else(|| {
                    let region = map::region_at(map_inner, &self.data.regions, column, row)?;
                    let zone = self.data.zones.by_country(&region.key);
                    if zone.is_none() {
                        tracing::debug!(country = %region.key, "no conflict zone for country");
                    }
                    zone.map(|z| z.id.clone())
                })
        } else if contains(radar_inner, column, row) {
            radar::zone_at(radar_inner, &self.data.zones, column, row).map(|z| z.id.clone())
        } else {
            None
        };

        if let Some(id) = hit {
            self.open_zone(id);
        }
    }

    /// Compute the header / tabs / body / footer split.
    #[must_use]
    pub fn compute_layout(area: Rect) -> DashboardLayout {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(1), // tabs
                Constraint::Min(5),    // panels
                Constraint::Length(3), // footer
            ])
            .split(area);

        DashboardLayout {
            header: outer[0],
            tabs: outer[1],
            body: outer[2],
            footer: outer[3],
        }
    }

    /// Compute the tactical sub-layout: map and radar on top, status beside
    /// the radar, developments underneath.
    #[must_use]
    pub fn compute_tactical_layout(body: Rect) -> TacticalLayout {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(body);
        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[0]);
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(5)])
            .split(top[1]);

        TacticalLayout {
            map: top[0],
            radar: side[0],
            status: side[1],
            developments: rows[1],
        }
    }

    /// Render the full dashboard (Elm View).
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if self.layout_mode.is_portrait() {
            render_portrait_notice(frame, area);
            return;
        }

        let layout = Self::compute_layout(area);
        render_header(frame, layout.header, &self.data.hud, &self.clock);
        render_tabs(frame, layout.tabs, self.tab);

        match self.tab {
            Tab::Tactical => self.render_tactical(frame, layout.body),
            Tab::Threats => {
                render_threats(frame, layout.body, &self.data.threat_cards, self.blink);
            }
            Tab::Intel => render_feed(
                frame,
                layout.body,
                &self.data.briefings,
                &self.data.breaking,
                &self.feed_scroll,
            ),
            Tab::Polls => match self.data.daily_poll() {
                Some(poll) => render_poll(frame, layout.body, poll, &self.poll, self.poll_cursor),
                None => frame.render_widget(
                    Paragraph::new("NO POLL TODAY").block(Block::default().borders(Borders::ALL)),
                    layout.body,
                ),
            },
        }

        render_footer(
            frame,
            layout.footer,
            self.metrics,
            self.data.hud.uplink_percent,
        );

        if let Some(zone) = self.selected_zone() {
            render_dialog(frame, layout.body, zone);
        }

        render_hud_overlay(frame, area, self.scan_line);
    }

    fn render_tactical(&self, frame: &mut Frame, body: Rect) {
        let tactical = Self::compute_tactical_layout(body);
        let focused = (self.focused_zone < self.data.zones.len()).then_some(self.focused_zone);
        render_map(
            frame,
            tactical.map,
            &MapView {
                zones: &self.data.zones,
                regions: &self.data.regions,
                focused,
                pointer: self.pointer,
            },
        );
        render_radar(
            frame,
            tactical.radar,
            &RadarView {
                blips: &self.data.blips,
                zones: &self.data.zones,
                sweep: self.sweep,
            },
        );
        render_global_status(frame, tactical.status, &self.data.hud);
        render_developments(frame, tactical.developments, &self.data.developments);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mouse: bool,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        if mouse {
            execute!(terminal.backend_mut(), DisableMouseCapture)?;
        }
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the dashboard event loop.
    ///
    /// This asks the host for landscape, sets up the terminal, starts the
    /// timers and the metrics sampler on `tx`, runs the main loop (poll
    /// events, update, render), and tears everything down on exit.
    pub fn run(&mut self, tx: &Sender<DashboardMessage>, options: RunOptions) -> io::Result<()> {
        try_lock_landscape(&TerminalHost);

        let mut terminal = Self::setup_terminal(options.mouse)?;
        let result = self.event_loop(&mut terminal, tx, options);
        Self::teardown_terminal(&mut terminal, options.mouse)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tx: &Sender<DashboardMessage>,
        options: RunOptions,
    ) -> io::Result<()> {
        let size = terminal.size()?;
        self.handle_message(DashboardMessage::Resize {
            width: size.width,
            height: size.height,
        });

        // Both stop and join on drop, before the terminal is restored.
        let _timers = TimerSet::start(&options.timers, tx)?;
        let _sampler = MetricsSampler::spawn(options.timers.clock, tx.clone())?;

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            // Poll for input with the frame interval as timeout
            if event::poll(options.timers.frame)? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        self.handle_key_action(map_key(key_event));
                    }
                    Event::Mouse(mouse_event) if options.mouse => {
                        if let Some(pointer) = map_mouse(mouse_event) {
                            self.handle_pointer(pointer);
                        }
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(DashboardMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }

            // Apply timer ticks and metrics samples
            self.update();
        }
        Ok(())
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Shown instead of the panels when the viewport is taller than wide.
fn render_portrait_notice(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let lines = vec![
        Line::styled("⟲ ROTATE DEVICE", theme.title_style()),
        Line::default(),
        Line::styled(
            "Widen the terminal for the tactical display.",
            theme.text_style(),
        ),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::marker_cell;
    use crate::poll::option_rect;
    use crate::radar::offset_cell;
    use crossbeam_channel::unbounded;
    use ratatui::backend::TestBackend;
    use warroom_core::MapPosition;

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 120,
        height: 40,
    };

    fn make_app() -> (DashboardApp, Sender<DashboardMessage>) {
        let (tx, rx) = unbounded();
        let app = DashboardApp::new(Dataset::builtin(), rx);
        (app, tx)
    }

    fn tactical() -> TacticalLayout {
        DashboardApp::compute_tactical_layout(DashboardApp::compute_layout(SCREEN).body)
    }

    fn click(app: &mut DashboardApp, (column, row): (u16, u16)) {
        app.handle_message(DashboardMessage::Pointer(PointerEvent::Click { column, row }));
    }

    fn screen(app: &DashboardApp) -> String {
        let backend = TestBackend::new(app.terminal_width, app.terminal_height);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(|frame| app.render(frame)).unwrap();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf.buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn initial_state() {
        let (app, _tx) = make_app();
        assert!(!app.should_quit);
        assert_eq!(app.tab, Tab::Tactical);
        assert!(!app.selection.is_open());
        assert!(!app.poll.is_submitted());
        assert!(app.pointer.is_none());
        assert_eq!(app.layout_mode, LayoutMode::Landscape);
        assert_eq!(app.scan_line.percent(), 0);
        assert_eq!(app.sweep.degrees(), 0);
    }

    #[test]
    fn ticks_advance_their_own_state() {
        let (mut app, tx) = make_app();
        tx.send(DashboardMessage::Tick(TimerKind::Sweep)).unwrap();
        tx.send(DashboardMessage::Tick(TimerKind::Sweep)).unwrap();
        tx.send(DashboardMessage::Tick(TimerKind::ScanLine)).unwrap();
        tx.send(DashboardMessage::Tick(TimerKind::Blink)).unwrap();
        app.update();
        assert_eq!(app.sweep.degrees(), 2);
        assert_eq!(app.scan_line.percent(), 1);
        assert!(app.blink.is_dim());
    }

    #[test]
    fn sweep_wraps_after_full_turn() {
        let (mut app, _tx) = make_app();
        for _ in 0..360 {
            app.handle_tick(TimerKind::Sweep);
        }
        assert_eq!(app.sweep.degrees(), 0);
    }

    #[test]
    fn handle_quit() {
        let (mut app, tx) = make_app();
        tx.send(DashboardMessage::Quit).unwrap();
        app.update();
        assert!(app.should_quit);
    }

    #[test]
    fn handle_resize_updates_layout_mode() {
        let (mut app, _tx) = make_app();
        app.handle_message(DashboardMessage::Resize {
            width: 60,
            height: 40,
        });
        assert_eq!(app.terminal_width, 60);
        assert_eq!(app.layout_mode, LayoutMode::Portrait);

        app.handle_message(DashboardMessage::Resize {
            width: 160,
            height: 40,
        });
        assert_eq!(app.layout_mode, LayoutMode::Landscape);
    }

    #[test]
    fn handle_system_metrics() {
        let (mut app, _tx) = make_app();
        app.handle_message(DashboardMessage::SystemMetrics(SystemMetrics {
            cpu_percent: 75.0,
            memory_percent: 40.0,
        }));
        assert!((app.metrics.cpu_percent - 75.0).abs() < f64::EPSILON);
        assert!((app.metrics.memory_percent - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tab_keys() {
        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::NextTab);
        assert_eq!(app.tab, Tab::Threats);
        app.handle_key_action(KeyAction::PrevTab);
        app.handle_key_action(KeyAction::PrevTab);
        assert_eq!(app.tab, Tab::Polls);
        app.handle_key_action(KeyAction::SelectTab(2));
        assert_eq!(app.tab, Tab::Intel);
        app.handle_key_action(KeyAction::SelectTab(9));
        assert_eq!(app.tab, Tab::Intel);
    }

    #[test]
    fn focus_cycles_and_enter_opens() {
        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::Right);
        assert_eq!(app.focused_zone, 1);
        app.handle_key_action(KeyAction::Left);
        app.handle_key_action(KeyAction::Left);
        assert_eq!(app.focused_zone, app.data().zones.len() - 1);

        app.handle_key_action(KeyAction::Activate);
        assert_eq!(app.selection.current(), Some("african-conflicts"));
    }

    #[test]
    fn selecting_while_open_switches_directly() {
        let (mut app, _tx) = make_app();
        app.open_zone("ukraine-russia".into());
        app.open_zone("middle-east".into());
        assert_eq!(app.selection.current(), Some("middle-east"));
        assert_eq!(app.selected_zone().map(|z| z.name.as_str()), Some("MIDDLE EAST TENSIONS"));
    }

    #[test]
    fn escape_closes_dialog_then_quits() {
        let (mut app, _tx) = make_app();
        app.open_zone("ukraine-russia".into());
        app.handle_key_action(KeyAction::Back);
        assert!(!app.selection.is_open());
        assert!(!app.should_quit);
        app.handle_key_action(KeyAction::Back);
        assert!(app.should_quit);
    }

    #[test]
    fn dialog_blocks_navigation_keys() {
        let (mut app, _tx) = make_app();
        app.open_zone("ukraine-russia".into());
        app.handle_key_action(KeyAction::Right);
        assert_eq!(app.focused_zone, 0);
        app.handle_key_action(KeyAction::Activate);
        assert_eq!(app.selection.current(), Some("ukraine-russia"));
    }

    #[test]
    fn poll_cursor_and_vote_once() {
        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::SelectTab(3));
        app.handle_key_action(KeyAction::Down);
        app.handle_key_action(KeyAction::Down);
        app.handle_key_action(KeyAction::Up);
        assert_eq!(app.poll_cursor, 1);

        app.handle_key_action(KeyAction::Activate);
        assert!(app.poll.is_submitted());
        assert_eq!(app.poll.selected(), Some("ukraine-russia"));

        // Later votes and cursor moves are ignored.
        app.handle_key_action(KeyAction::Down);
        assert_eq!(app.poll_cursor, 1);
        assert!(!app.vote(3));
        assert_eq!(app.poll.selected(), Some("ukraine-russia"));
    }

    #[test]
    fn poll_cursor_clamps() {
        let (mut app, _tx) = make_app();
        app.tab = Tab::Polls;
        app.handle_key_action(KeyAction::Up);
        assert_eq!(app.poll_cursor, 0);
        for _ in 0..10 {
            app.handle_key_action(KeyAction::Down);
        }
        assert_eq!(app.poll_cursor, 3);
    }

    #[test]
    fn intel_scroll_keys() {
        let (mut app, _tx) = make_app();
        app.tab = Tab::Intel;
        app.handle_key_action(KeyAction::Down);
        assert_eq!(app.feed_scroll.offset, 1);
        app.handle_key_action(KeyAction::PageDown);
        assert_eq!(app.feed_scroll.offset, 1 + FEED_PAGE);
        app.handle_key_action(KeyAction::End);
        assert_eq!(app.feed_scroll.offset, app.data().briefings.len() - 1);
        app.handle_key_action(KeyAction::Home);
        assert_eq!(app.feed_scroll.offset, 0);
    }

    #[test]
    fn scroll_keys_ignored_on_other_tabs() {
        let (mut app, _tx) = make_app();
        app.handle_key_action(KeyAction::Down);
        app.handle_key_action(KeyAction::End);
        assert_eq!(app.feed_scroll.offset, 0);
        assert_eq!(app.poll_cursor, 0);
    }

    #[test]
    fn click_map_marker_opens_dialog() {
        let (mut app, _tx) = make_app();
        let inner = map::map_inner(tactical().map);
        let zone = app.data().zones.by_id("middle-east").unwrap().clone();
        click(&mut app, marker_cell(inner, zone.position));
        assert_eq!(app.selection.current(), Some("middle-east"));
    }

    #[test]
    fn click_country_region_resolves_zone() {
        let (mut app, _tx) = make_app();
        let inner = map::map_inner(tactical().map);
        let region = app
            .data()
            .regions
            .iter()
            .find(|r| r.key == "ukraine")
            .unwrap()
            .clone();
        let centre = MapPosition::new((region.x0 + region.x1) / 2.0, (region.y0 + region.y1) / 2.0);
        click(&mut app, marker_cell(inner, centre));
        assert_eq!(app.selection.current(), Some("ukraine-russia"));
    }

    #[test]
    fn click_unmatched_country_does_nothing() {
        let (mut app, _tx) = make_app();
        let inner = map::map_inner(tactical().map);
        let region = app
            .data()
            .regions
            .iter()
            .find(|r| r.key == "brazil")
            .unwrap()
            .clone();
        let centre = MapPosition::new((region.x0 + region.x1) / 2.0, (region.y0 + region.y1) / 2.0);
        click(&mut app, marker_cell(inner, centre));
        assert!(!app.selection.is_open());
    }

    #[test]
    fn click_radar_marker_opens_dialog() {
        let (mut app, _tx) = make_app();
        let inner = radar::radar_inner(tactical().radar);
        let offset = app.data().zones.by_id("south-china-sea").unwrap().radar_offset();
        click(&mut app, offset_cell(inner, offset));
        assert_eq!(app.selection.current(), Some("south-china-sea"));
    }

    #[test]
    fn click_outside_dialog_closes_it() {
        let (mut app, _tx) = make_app();
        let body = DashboardApp::compute_layout(SCREEN).body;
        let popup = dialog_rect(body);
        app.open_zone("ukraine-russia".into());

        click(&mut app, (popup.x + popup.width / 2, popup.y + popup.height / 2));
        assert!(app.selection.is_open());

        click(&mut app, (body.x, body.y));
        assert!(!app.selection.is_open());
    }

    #[test]
    fn click_tab_switches() {
        let (mut app, _tx) = make_app();
        let tabs = DashboardApp::compute_layout(SCREEN).tabs;
        // " 1 TACTICAL " + gap, then " 2 THREATS "
        click(&mut app, (tabs.x + 16, tabs.y));
        assert_eq!(app.tab, Tab::Threats);
    }

    #[test]
    fn click_poll_option_votes() {
        let (mut app, _tx) = make_app();
        app.tab = Tab::Polls;
        let inner = poll_inner(DashboardApp::compute_layout(SCREEN).body);
        let rect = option_rect(inner, 2).unwrap();
        click(&mut app, (rect.x + 3, rect.y));
        assert_eq!(app.poll.selected(), Some("china-taiwan"));
        assert_eq!(app.poll_cursor, 2);
    }

    #[test]
    fn pointer_over_map_sets_readout() {
        let (mut app, _tx) = make_app();
        let inner = map::map_inner(tactical().map);
        app.handle_pointer(PointerEvent::Move {
            column: inner.x,
            row: inner.y,
        });
        let geo = app.pointer.unwrap();
        assert!((geo.lat - 85.0).abs() < 1e-9);
        assert!((geo.lon + 180.0).abs() < 1e-9);

        app.handle_pointer(PointerEvent::Move { column: 0, row: 0 });
        assert!(app.pointer.is_none());
    }

    #[test]
    fn portrait_ignores_pointer() {
        let (mut app, _tx) = make_app();
        app.handle_message(DashboardMessage::Resize {
            width: 60,
            height: 40,
        });
        app.handle_pointer(PointerEvent::Click { column: 20, row: 2 });
        assert_eq!(app.tab, Tab::Tactical);
    }

    #[test]
    fn layout_computation() {
        let layout = DashboardApp::compute_layout(SCREEN);
        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.header.height, 2);
        assert_eq!(layout.tabs.height, 1);
        assert_eq!(layout.footer.height, 3);
        assert_eq!(layout.footer.y + layout.footer.height, SCREEN.height);
        assert_eq!(
            layout.header.height + layout.tabs.height + layout.body.height + layout.footer.height,
            SCREEN.height
        );
    }

    #[test]
    fn tactical_layout_computation() {
        let body = DashboardApp::compute_layout(SCREEN).body;
        let t = DashboardApp::compute_tactical_layout(body);
        assert_eq!(t.map.width + t.radar.width, body.width);
        assert_eq!(t.radar.x, t.status.x);
        assert_eq!(t.status.height, 5);
        assert_eq!(t.developments.y + t.developments.height, body.y + body.height);
    }

    #[test]
    fn render_tactical_tab() {
        let (app, _tx) = make_app();
        let screen = screen(&app);
        assert!(screen.contains("DEFENSE GRID"));
        assert!(screen.contains("GLOBAL THREAT MAP"));
        assert!(screen.contains("RADAR"));
        assert!(screen.contains("GLOBAL STATUS"));
        assert!(screen.contains("RECENT DEVELOPMENTS"));
        assert!(screen.contains("SATCOM: ACTIVE"));
    }

    #[test]
    fn render_other_tabs() {
        let (mut app, _tx) = make_app();
        app.tab = Tab::Threats;
        assert!(screen(&app).contains("THREAT ASSESSMENT"));
        app.tab = Tab::Intel;
        assert!(screen(&app).contains("INTELLIGENCE BRIEFINGS"));
        app.tab = Tab::Polls;
        assert!(screen(&app).contains("DAILY POLL"));
    }

    #[test]
    fn render_dialog_when_open() {
        let (mut app, _tx) = make_app();
        app.open_zone("african-conflicts".into());
        let screen = screen(&app);
        assert!(screen.contains("AFRICAN REGIONAL CONFLICTS"));
        assert!(screen.contains("KEY DEVELOPMENTS"));
    }

    #[test]
    fn render_portrait_notice_only() {
        let (mut app, _tx) = make_app();
        app.handle_message(DashboardMessage::Resize {
            width: 40,
            height: 30,
        });
        let screen = screen(&app);
        assert!(screen.contains("ROTATE DEVICE"));
        assert!(!screen.contains("GLOBAL THREAT MAP"));
    }
}
