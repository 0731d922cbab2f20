//! 3D visualization of the puzzle using kiss3d.
//!
//! The viewer owns every scene node and maps ring ids to their node
//! handles; the session only ever reports logical placements (tower and
//! stack level) which are converted to world anchors here.
//!
//! Controls: keys 1-3 pick up the top ring of a tower or drop the held
//! ring onto it, Escape cancels a hold, S starts the automatic solution,
//! N starts a new game, Up/Down change the ring count.

use kiss3d::prelude::*;
use rustc_hash::FxHashMap;

use hanoi::rings::{ring_width, RingId, MAX_RINGS};
use hanoi::session::{Placement, Session};
use hanoi::towers::{TowerId, NUM_TOWERS};

/// Horizontal distance between tower posts.
const TOWER_SPACING: f32 = 3.0;
/// Height of one ring in world units.
const RING_HEIGHT: f32 = 0.3;
/// Height of each tower post, tall enough for a full stack.
const POLE_HEIGHT: f32 = MAX_RINGS as f32 * RING_HEIGHT + 0.6;
/// Frames a ring spends travelling to its landing anchor.
const TRAVEL_FRAMES: u32 = 24;
/// Pause after a landing before the next automatic move starts.
const SETTLE_FRAMES: u32 = 12;

/// Returns the display color for a given ring id (0-7).
///
/// The mapping is stable so a ring keeps its color across games.
fn ring_color(ring: RingId) -> Color {
    match ring % MAX_RINGS {
        0 => Color::new(1.0, 0.2, 0.2, 1.0), // red
        1 => Color::new(1.0, 0.6, 0.2, 1.0), // orange
        2 => Color::new(1.0, 1.0, 0.2, 1.0), // yellow
        3 => Color::new(0.2, 1.0, 0.2, 1.0), // green
        4 => Color::new(0.2, 0.6, 1.0, 1.0), // light blue
        5 => Color::new(0.6, 0.2, 1.0, 1.0), // violet
        6 => Color::new(1.0, 0.2, 0.8, 1.0), // pink
        _ => Color::new(0.8, 0.8, 0.8, 1.0), // gray
    }
}

/// World x of a tower post.
fn tower_x(tower: TowerId) -> f32 {
    (tower as f32 - 1.0) * TOWER_SPACING
}

/// World anchor of a ring resting at `height` on `tower`.
fn rest_anchor(tower: TowerId, height: usize) -> Vec3 {
    Vec3::new(
        tower_x(tower),
        height as f32 * RING_HEIGHT + RING_HEIGHT / 2.0,
        0.0,
    )
}

/// World anchor of a held ring, floating above its tower's post.
fn hover_anchor(tower: TowerId) -> Vec3 {
    Vec3::new(tower_x(tower), POLE_HEIGHT + 0.4, 0.0)
}

/// One automatic move being played back: a travel phase toward the landing
/// anchor followed by a settle pause.
struct MoveAnimation {
    ring: RingId,
    start: Vec3,
    target: Vec3,
    frame: u32,
}

impl MoveAnimation {
    fn new(ring: RingId, start: Vec3, target: Vec3) -> Self {
        Self {
            ring,
            start,
            target,
            frame: 0,
        }
    }

    /// Advances one frame and returns the ring's position; the second
    /// value reports whether the move has fully settled.
    fn advance(&mut self) -> (Vec3, bool) {
        self.frame += 1;
        let progress = self.frame.min(TRAVEL_FRAMES) as f32 / TRAVEL_FRAMES as f32;
        let position = self.start + (self.target - self.start) * progress;
        (position, self.frame >= TRAVEL_FRAMES + SETTLE_FRAMES)
    }
}

/// Builds the static board: base slab plus three posts.
fn build_board(scene: &mut SceneNode3d) {
    scene
        .add_cube(3.0 * TOWER_SPACING + 0.6, 0.3, 2.0)
        .set_color(Color::new(0.6, 0.4, 0.2, 1.0))
        .set_position(Vec3::new(0.0, -0.15, 0.0));

    for tower in 0..NUM_TOWERS {
        scene
            .add_cube(0.12, POLE_HEIGHT, 0.12)
            .set_color(Color::new(0.8, 0.6, 0.4, 1.0))
            .set_position(Vec3::new(tower_x(tower), POLE_HEIGHT / 2.0, 0.0));
    }
}

/// Creates one node per ring at its resting slot and returns the handle
/// map keyed by ring id.
fn build_rings(scene: &mut SceneNode3d, session: &Session) -> FxHashMap<RingId, SceneNode3d> {
    let mut nodes = FxHashMap::default();

    for tower in 0..NUM_TOWERS {
        for (height, &ring) in session.towers().stack(tower).iter().enumerate() {
            let width = ring_width(session.ring(ring).size);
            let node = scene
                .add_cube(width, RING_HEIGHT * 0.85, width)
                .set_color(ring_color(ring))
                .set_position(rest_anchor(tower, height));
            nodes.insert(ring, node);
        }
    }

    nodes
}

/// Window title with ring count, move counter, and status text.
fn title(session: &Session) -> String {
    format!(
        "Tower of Hanoi - {} rings - moves: {} - {} [1-3] towers [S] solve [N] new [Up/Down] rings",
        session.ring_count(),
        session.moves(),
        session.status()
    )
}

/// Handles a tower key: grab its top ring, or drop the held ring onto it.
fn tower_key(
    session: &mut Session,
    nodes: &mut FxHashMap<RingId, SceneNode3d>,
    tower: TowerId,
) {
    if session.grabbed().is_some() {
        match session.release(Some(tower)) {
            Some(Placement::Moved(step)) => {
                if let Some(node) = nodes.get_mut(&step.ring) {
                    node.set_position(rest_anchor(step.to, step.height));
                }
            }
            Some(Placement::Returned(ring)) => snap_home(session, nodes, ring),
            None => {}
        }
    } else if let Some(ring) = session.towers().top(tower) {
        // refused while the solver is running
        session.grab(ring);
    }
}

/// Puts a ring's visual back on its resting slot.
fn snap_home(session: &Session, nodes: &mut FxHashMap<RingId, SceneNode3d>, ring: RingId) {
    let tower = session.ring(ring).tower;
    let height = session.towers().height(tower) - 1;
    if let Some(node) = nodes.get_mut(&ring) {
        node.set_position(rest_anchor(tower, height));
    }
}

/// Opens the interactive viewer for a session.
pub fn display(session: Session) {
    pollster::block_on(display_async(session));
}

async fn display_async(mut session: Session) {
    let mut window = Window::new(&title(&session)).await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(10.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 6.0, 5.0));
    build_board(&mut scene);

    let mut ring_nodes = build_rings(&mut scene, &session);
    // the automatic move currently travelling or settling
    let mut playback: Option<MoveAnimation> = None;
    let mut needs_rebuild = false;
    let mut last_title = title(&session);

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        Key::Key1 => tower_key(&mut session, &mut ring_nodes, 0),
                        Key::Key2 => tower_key(&mut session, &mut ring_nodes, 1),
                        Key::Key3 => tower_key(&mut session, &mut ring_nodes, 2),
                        Key::Escape => {
                            if let Some(Placement::Returned(ring)) = session.release(None) {
                                snap_home(&session, &mut ring_nodes, ring);
                            }
                        }
                        Key::S => {
                            session.start_solve();
                        }
                        Key::N if !session.is_solving() => {
                            session.reset(session.ring_count());
                            needs_rebuild = true;
                        }
                        Key::Up if !session.is_solving() => {
                            let count = (session.ring_count() + 1).min(MAX_RINGS);
                            session.reset(count);
                            needs_rebuild = true;
                        }
                        Key::Down if !session.is_solving() => {
                            let count = session.ring_count().saturating_sub(1).max(1);
                            session.reset(count);
                            needs_rebuild = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if needs_rebuild {
            for (_, mut node) in ring_nodes.drain() {
                node.remove();
            }
            ring_nodes = build_rings(&mut scene, &session);
            playback = None;
            needs_rebuild = false;
        }

        // drive the automatic playback one settled move at a time
        match &mut playback {
            Some(animation) => {
                let (position, done) = animation.advance();
                if let Some(node) = ring_nodes.get_mut(&animation.ring) {
                    node.set_position(position);
                }
                if done {
                    playback = None;
                }
            }
            None => {
                if session.is_solving() {
                    if let Some(step) = session.advance_solve() {
                        // the ring just left the old top slot of `from`
                        let start = rest_anchor(step.from, session.towers().height(step.from));
                        let target = rest_anchor(step.to, step.height);
                        playback = Some(MoveAnimation::new(step.ring, start, target));
                    }
                }
            }
        }

        // a held ring floats above its tower until released
        if let Some(ring) = session.grabbed() {
            let tower = session.ring(ring).tower;
            if let Some(node) = ring_nodes.get_mut(&ring) {
                node.set_position(hover_anchor(tower));
            }
        }

        let current_title = title(&session);
        if current_title != last_title {
            window.set_title(&current_title);
            last_title = current_title;
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}
