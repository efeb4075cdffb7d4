//! The desktop session: every piece of mutable desktop state, and the frame
//! loop that drives it.

use aqua_identity::CredentialStore;
use tracing::{debug, info, warn};

use crate::clock::ClockSource;
use crate::config::DesktopConfig;
use crate::content::{ContentHosts, LaunchRequest};
use crate::dock::Dock;
use crate::error::DesktopResult;
use crate::input::{
    CursorState, FocusContext, InputRouter, KeySource, KeySymbol, KeyTarget, PointerSource,
    PointerTransition,
};
use crate::overlay::{LoginOverlay, Overlay};
use crate::render::{chrome, Canvas, RenderScheduler};
use crate::window::{LaunchSpec, WindowId, WindowManager};

/// Which half of the session is running
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// The login overlay owns the screen
    Login,
    /// Windows, dock and top bar are live
    Desktop,
}

/// Fixed busy-wait between frames
#[derive(Clone, Copy, Debug)]
pub struct FramePacer {
    spins: u32,
}

impl FramePacer {
    pub fn new(spins: u32) -> Self {
        Self { spins }
    }

    /// Burn the configured number of spin iterations
    pub fn pace(&self) {
        for _ in 0..self.spins {
            std::hint::spin_loop();
        }
    }
}

/// One user's desktop, from login to power-off
///
/// Each [`tick`](Self::tick) routes one frame of input completely before
/// painting anything.
pub struct DesktopSession {
    config: DesktopConfig,
    login: Option<LoginOverlay>,
    identity: Option<CredentialStore>,
    windows: WindowManager,
    dock: Dock,
    hosts: ContentHosts,
    router: InputRouter,
    scheduler: RenderScheduler,
    clock: Box<dyn ClockSource>,
    clock_text: Option<String>,
    pacer: FramePacer,
    cursor: CursorState,
}

impl DesktopSession {
    /// Start at the login screen
    pub fn with_login(
        config: DesktopConfig,
        hosts: ContentHosts,
        clock: Box<dyn ClockSource>,
        store: CredentialStore,
    ) -> DesktopResult<Self> {
        let mut session = Self::build(config, hosts, clock)?;
        session.login = Some(LoginOverlay::new(store, session.config.screen.size()));
        info!("session started at login");
        Ok(session)
    }

    /// Start straight on the desktop, with startup launches already open
    pub fn unlocked(
        config: DesktopConfig,
        hosts: ContentHosts,
        clock: Box<dyn ClockSource>,
    ) -> DesktopResult<Self> {
        let mut session = Self::build(config, hosts, clock)?;
        session.enter_desktop();
        Ok(session)
    }

    fn build(
        config: DesktopConfig,
        hosts: ContentHosts,
        clock: Box<dyn ClockSource>,
    ) -> DesktopResult<Self> {
        config.validate()?;
        let screen = config.screen.size();
        Ok(Self {
            windows: WindowManager::from_config(&config.windows),
            dock: Dock::new(&config.dock, screen),
            hosts,
            router: InputRouter::new(),
            scheduler: RenderScheduler::new(config.frame.clock_interval),
            clock,
            clock_text: None,
            pacer: FramePacer::new(config.frame.spin_iterations),
            cursor: CursorState::centered(screen),
            login: None,
            identity: None,
            config,
        })
    }

    /// Run one frame: route input, update state, then paint.
    pub fn tick(&mut self, key: Option<KeySymbol>, cursor: CursorState, canvas: &mut dyn Canvas) {
        self.cursor = cursor;
        if let Some(key) = key {
            self.route_key(key);
        }
        if self.login.is_some() {
            self.tick_login(canvas);
        } else {
            self.tick_desktop(canvas);
        }
    }

    /// Poll the drivers and tick forever
    pub fn run(
        &mut self,
        keys: &mut dyn KeySource,
        pointer: &mut dyn PointerSource,
        canvas: &mut dyn Canvas,
    ) -> ! {
        loop {
            let key = keys.poll_key();
            let cursor = pointer.poll_pointer();
            self.tick(key, cursor, canvas);
            self.pacer.pace();
        }
    }

    fn route_key(&mut self, key: KeySymbol) {
        let focus = FocusContext {
            overlay_active: self.login.is_some(),
            editor_open: self.hosts.editor().is_open(),
        };
        match focus.key_target() {
            KeyTarget::Overlay => {
                if let Some(login) = self.login.as_mut() {
                    login.handle_key(key);
                }
            }
            KeyTarget::Editor => self.hosts.editor_mut().handle_key(key),
            KeyTarget::Terminal => self.hosts.terminal_mut().handle_key(key),
        }
    }

    fn tick_login(&mut self, canvas: &mut dyn Canvas) {
        let Some(login) = self.login.as_mut() else {
            return;
        };
        if self.router.pointer_transition(self.cursor.buttons) == Some(PointerTransition::Pressed) {
            login.handle_click(self.cursor.position);
        }

        let plan = self.scheduler.plan_frame(false);
        if plan.background {
            chrome::paint_background(canvas);
        }
        login.render(canvas);
        chrome::paint_cursor(canvas, self.cursor.position);

        if login.is_dismissed() {
            let store = self.login.take().map(LoginOverlay::into_store);
            info!(user = ?store.as_ref().and_then(|s| s.current_user()), "login dismissed");
            self.identity = store;
            self.enter_desktop();
        }
    }

    fn tick_desktop(&mut self, canvas: &mut dyn Canvas) {
        while let Some(request) = self.hosts.terminal_mut().take_launch_request() {
            self.handle_launch(request);
        }

        self.router
            .dispatch_pointer(&self.cursor, &mut self.windows, &mut self.dock);

        self.paint_desktop(canvas);
    }

    fn paint_desktop(&mut self, canvas: &mut dyn Canvas) {
        let active = self
            .windows
            .active_window()
            .map(|w| (w.kind, w.content_rect()));
        let dirty = active.is_some_and(|(kind, _)| self.hosts.needs_redraw(kind));
        let plan = self.scheduler.plan_frame(dirty);

        if plan.refresh_clock || self.clock_text.is_none() {
            self.clock_text = Some(self.clock.now().to_string());
        }
        if plan.background {
            chrome::paint_background(canvas);
        }
        if plan.top_bar {
            chrome::paint_top_bar(canvas, self.clock_text.as_deref());
        }

        self.dock.render(canvas);
        self.windows.render_all(canvas, &self.hosts);

        if plan.active_content {
            if let Some((kind, area)) = active {
                self.hosts.render(kind, canvas, area);
            }
        }

        chrome::paint_cursor(canvas, self.cursor.position);
    }

    fn handle_launch(&mut self, request: LaunchRequest) {
        match request {
            LaunchRequest::Window(spec) => {
                self.launch(&spec);
            }
            LaunchRequest::Editor { file } => {
                debug!(file = ?file, "opening editor");
                self.hosts.editor_mut().open(file.as_deref());
                let spec = self.config.launch.editor.clone();
                self.launch(&spec);
                self.scheduler.request_full_redraw();
            }
        }
    }

    fn launch(&mut self, spec: &LaunchSpec) -> Option<WindowId> {
        match self.windows.launch(spec) {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(title = %spec.title, error = %e, "launch ignored");
                None
            }
        }
    }

    fn enter_desktop(&mut self) {
        self.scheduler.request_full_redraw();

        let startup = self.config.launch.startup.clone();
        for item in &startup {
            if self.launch(&item.launch).is_none() {
                continue;
            }
            if let Some(slot) = item.dock_slot {
                if let Err(e) = self.dock.set_running(slot, true) {
                    warn!(slot, error = %e, "bad dock slot for startup launch");
                }
            }
        }
        info!(windows = self.windows.len(), "desktop ready");
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        if self.login.is_some() {
            Phase::Login
        } else {
            Phase::Desktop
        }
    }

    /// The login overlay while it is up
    pub fn login(&self) -> Option<&LoginOverlay> {
        self.login.as_ref()
    }

    /// User who signed in at the login screen
    pub fn current_user(&self) -> Option<&str> {
        self.identity.as_ref().and_then(|s| s.current_user())
    }

    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut WindowManager {
        &mut self.windows
    }

    pub fn dock(&self) -> &Dock {
        &self.dock
    }

    pub fn hosts(&self) -> &ContentHosts {
        &self.hosts
    }

    /// Clock text last painted in the top bar
    pub fn clock_text(&self) -> Option<&str> {
        self.clock_text.as_deref()
    }

    /// Pointer state from the last tick
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    /// Ask for the background and top bar on the next frame
    pub fn request_full_redraw(&mut self) {
        self.scheduler.request_full_redraw();
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }
}
