//=========================================================================
// Desktop Demo
//=========================================================================
//
// Runs the bridge against a stand-in game that logs every command it
// receives. Arrows/WASD move, Space jumps, E uses the special ability,
// Q/R switch weapons, the mouse aims and fires.
//
//   RUST_LOG=demo=debug cargo run --bin desktop_demo
//
//=========================================================================

use log::{debug, error, info, LevelFilter};
use mobile_bridge::prelude::*;

//=== Demo Game ===========================================================

#[derive(Default)]
struct Player {
    /// 16.16 fixed point.
    x: i32,
    y: i32,
    weapon: usize,
    angle: i32,
}

impl Player {
    const WEAPONS: [&'static str; 3] = ["blaster", "grenade", "laser"];
}

impl Entity for Player {
    fn set_locomotion_state(&mut self, _state: LocomotionState) {}

    fn try_move(&mut self, dx: i32, dy: i32, flags: MoveFlags) {
        self.x = self.x.saturating_add(dx << 16);
        if flags.contains(MoveFlags::JUMP) {
            debug!(target: "demo", "jump");
        } else if dy > 0 {
            debug!(target: "demo", "crouch");
        }
        if dx != 0 {
            debug!(target: "demo", "x = {}", self.x >> 16);
        }
    }

    fn set_angle(&mut self, degrees: i32) {
        if degrees != self.angle {
            self.angle = degrees;
            debug!(target: "demo", "aim {}°", degrees);
        }
    }

    fn fire(&mut self) {
        debug!(target: "demo", "fire {}", Self::WEAPONS[self.weapon]);
    }

    fn do_special(&mut self) {
        info!(target: "demo", "special ability");
    }

    fn next_weapon(&mut self) {
        self.weapon = (self.weapon + 1) % Self::WEAPONS.len();
        info!(target: "demo", "weapon: {}", Self::WEAPONS[self.weapon]);
    }

    fn prev_weapon(&mut self) {
        self.weapon = (self.weapon + Self::WEAPONS.len() - 1) % Self::WEAPONS.len();
        info!(target: "demo", "weapon: {}", Self::WEAPONS[self.weapon]);
    }

    fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

#[derive(Default)]
struct Camera {
    player: Player,
}

impl View for Camera {
    type Entity = Player;

    fn offset(&self) -> (i32, i32) {
        (0, 0)
    }

    fn focus_mut(&mut self) -> Option<&mut Player> {
        Some(&mut self.player)
    }
}

#[derive(Default)]
struct DemoGame {
    camera: Camera,
}

impl Game for DemoGame {
    type View = Camera;

    fn first_view_mut(&mut self) -> Option<&mut Camera> {
        Some(&mut self.camera)
    }
}

//=== main() ==============================================================

// Android hosts drive the runtime from their own activity.
#[cfg(target_os = "android")]
fn main() {}

#[cfg(not(target_os = "android"))]
fn main() {
    mobile_bridge::logging::init(LevelFilter::Info);

    let mut runtime = RuntimeBuilder::new()
        .with_config(PlatformConfig::new().with_window_title("Mobile Bridge Demo"))
        .build::<DemoGame>();

    runtime.initialize(DemoGame::default());

    if let Err(e) = runtime.platform_mut().create_window(1280, 720, false) {
        error!(target: "demo", "{}", e);
        return;
    }

    info!(
        target: "demo",
        "Storage: {:?}, tablet: {}",
        runtime.platform().internal_storage_path(),
        runtime.platform().is_tablet()
    );

    if let Err(e) = runtime.run() {
        error!(target: "demo", "{}", e);
    }
}
