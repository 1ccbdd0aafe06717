//! Laser Dodge entry point
//!
//! Browser builds drive the game from requestAnimationFrame and project each
//! snapshot onto the page. Native builds run a headless round with a simple
//! autopilot and log the result.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlButtonElement, HtmlElement, KeyboardEvent, MouseEvent};

    use laser_dodge::backdrop::Backdrop;
    use laser_dodge::consts::*;
    use laser_dodge::platform::{KeyPhase, map_key};
    use laser_dodge::sim::{GameEvent, InputEvent};
    use laser_dodge::{Game, RenderSnapshot, Tuning};

    /// DOM elements the snapshot is projected onto
    struct Surface {
        document: Document,
        arena: HtmlElement,
        hero: HtmlElement,
        score: Option<HtmlElement>,
        time: Option<HtmlElement>,
        message: Option<HtmlElement>,
        start_btn: Option<HtmlButtonElement>,
        reset_btn: Option<HtmlButtonElement>,
        /// Laser elements keyed by entity ID
        lasers: HashMap<u32, HtmlElement>,
    }

    impl Surface {
        fn new(document: Document) -> Option<Self> {
            let get = |id: &str| -> Option<HtmlElement> {
                document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
            };
            let button = |id: &str| -> Option<HtmlButtonElement> {
                document
                    .get_element_by_id(id)?
                    .dyn_into::<HtmlButtonElement>()
                    .ok()
            };

            let arena = get("game-area")?;
            let hero = get("hero")?;
            let style = arena.style();
            let _ = style.set_property("width", &format!("{}px", ARENA_WIDTH));
            let _ = style.set_property("height", &format!("{}px", ARENA_HEIGHT));

            Some(Self {
                score: get("score"),
                time: get("time"),
                message: get("message"),
                start_btn: button("startBtn"),
                reset_btn: button("resetBtn"),
                document,
                arena,
                hero,
                lasers: HashMap::new(),
            })
        }

        fn place(el: &HtmlElement, x: f32, y: f32) {
            let style = el.style();
            let _ = style.set_property("left", &format!("{}px", x));
            let _ = style.set_property("top", &format!("{}px", y));
        }

        fn draw(&mut self, snap: &RenderSnapshot) {
            Self::place(&self.hero, snap.player.left(), snap.player.top());

            // Drop lasers that are gone
            self.lasers.retain(|id, el| {
                let alive = snap.projectiles.iter().any(|p| p.id == *id);
                if !alive {
                    el.remove();
                }
                alive
            });

            for p in &snap.projectiles {
                if !self.lasers.contains_key(&p.id) {
                    let Some(el) = self
                        .document
                        .create_element("div")
                        .ok()
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                    else {
                        continue;
                    };
                    let _ = el.class_list().add_2("laser", p.kind.css_class());
                    let _ = self.arena.append_child(&el);
                    self.lasers.insert(p.id, el);
                }
                if let Some(el) = self.lasers.get(&p.id) {
                    Self::place(el, p.rect.left(), p.rect.top());
                }
            }

            if let Some(el) = &self.score {
                el.set_text_content(Some(&snap.score.to_string()));
            }
            if let Some(el) = &self.time {
                el.set_text_content(Some(&snap.time_remaining.to_string()));
            }
            if let Some(el) = &self.message {
                el.set_text_content(Some(&snap.message));
            }
            if let Some(btn) = &self.start_btn {
                btn.set_disabled(!snap.start_enabled);
            }
            if let Some(btn) = &self.reset_btn {
                btn.set_disabled(!snap.reset_enabled);
            }
        }

        fn react(&self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::PlayerHit => {
                        // Restart the flash animation
                        let classes = self.hero.class_list();
                        let _ = classes.remove_1("hit");
                        let _ = self.hero.offset_width();
                        let _ = classes.add_1("hit");
                    }
                    GameEvent::Reset | GameEvent::Started => {
                        let _ = self.hero.class_list().remove_1("hit");
                    }
                    _ => {}
                }
            }
        }
    }

    struct App {
        game: Game,
        surface: Surface,
        backdrop: Backdrop,
        last_time: f64,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                FRAME_MS
            };
            self.last_time = time;

            self.game.advance(dt);
            self.present();
        }

        fn present(&mut self) {
            let events = self.game.drain_events();
            self.backdrop.handle_events(&events);
            self.surface.react(&events);
            self.surface.draw(&self.game.snapshot());
        }

        fn input(&mut self, event: InputEvent) {
            self.game.handle_input(event);
            self.present();
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Laser Dodge starting...");

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document");
            return;
        };
        let Some(surface) = Surface::new(document) else {
            log::error!("Missing #game-area or #hero");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            game: Game::new(Tuning::default(), seed),
            surface,
            backdrop: Backdrop::new("backdrop"),
            last_time: 0.0,
        }));
        log::info!("Game initialized with seed: {}", seed);

        app.borrow_mut().present();
        setup_keyboard(app.clone());
        setup_buttons(app.clone());

        request_animation_frame(app);
        log::info!("Laser Dodge running!");
    }

    fn setup_keyboard(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        for (kind, phase) in [("keydown", KeyPhase::Down), ("keyup", KeyPhase::Up)] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = map_key(&event.key(), phase) {
                    event.prevent_default();
                    app.borrow_mut().input(input);
                }
            });
            let _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(app: Rc<RefCell<App>>) {
        let targets: [(Option<HtmlElement>, InputEvent); 3] = {
            let a = app.borrow();
            let s = &a.surface;
            [
                (
                    s.start_btn.clone().map(Into::into),
                    InputEvent::StartRequested,
                ),
                (
                    s.reset_btn.clone().map(Into::into),
                    InputEvent::ResetRequested,
                ),
                // Clicking the arena also starts a stopped game
                (Some(s.arena.clone()), InputEvent::StartRequested),
            ]
        };

        for (el, input) in targets {
            let Some(el) = el else { continue };
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                event.stop_propagation();
                app.borrow_mut().input(input);
            });
            let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use laser_dodge::consts::FRAME_MS;
    use laser_dodge::{Game, SessionPhase, Tuning};

    env_logger::init();
    log::info!("Laser Dodge (native) starting...");
    log::info!("Native mode runs a headless round - run with `trunk serve` for the web version");

    let tuning = match std::env::args().nth(1) {
        Some(path) => Tuning::load(std::path::Path::new(&path)),
        None => Tuning::default(),
    };
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut game = Game::new(tuning, seed);
    game.start();
    let mut frames = 0u64;
    while game.phase() == SessionPhase::Running {
        autopilot::steer(&mut game);
        game.advance(FRAME_MS);
        frames += 1;
        for event in game.drain_events() {
            log::debug!("{:?}", event);
        }
    }

    let snap = game.snapshot();
    log::info!("Headless round over after {} frames", frames);
    println!("{}", snap.message);
}

/// Dodge autopilot for the headless run
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use laser_dodge::Game;
    use laser_dodge::consts::*;
    use laser_dodge::sim::{Direction, InputEvent};

    /// How far ahead (px) the autopilot looks for incoming lasers
    const LOOKAHEAD: f32 = 260.0;
    /// Extra vertical clearance (px) it tries to keep
    const CLEARANCE: f32 = 10.0;

    /// Hold up or down to get out of the lane of the nearest threatening laser
    pub fn steer(game: &mut Game) {
        let state = game.state();
        let hero = state.player.hitbox();
        let margin = game.tuning().edge_margin;

        let threat = state
            .projectiles
            .iter()
            .map(|p| p.hitbox())
            .filter(|r| r.right() >= hero.left() && r.left() - hero.right() < LOOKAHEAD)
            .filter(|r| {
                r.bottom() + CLEARANCE >= hero.top() && r.top() - CLEARANCE <= hero.bottom()
            })
            .min_by(|a, b| {
                a.left()
                    .partial_cmp(&b.left())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let want = threat.map(|laser| {
            let room_above = hero.top() - margin;
            let room_below = ARENA_HEIGHT - margin - hero.bottom();
            if laser.center().y > hero.center().y && room_above > PLAYER_HEIGHT {
                Direction::Up
            } else if room_below > PLAYER_HEIGHT {
                Direction::Down
            } else {
                Direction::Up
            }
        });

        let (up, down) = match want {
            Some(Direction::Up) => (true, false),
            Some(Direction::Down) => (false, true),
            None => (false, false),
        };
        for (dir, held) in [(Direction::Up, up), (Direction::Down, down)] {
            game.handle_input(if held {
                InputEvent::Pressed(dir)
            } else {
                InputEvent::Released(dir)
            });
        }
    }
}
