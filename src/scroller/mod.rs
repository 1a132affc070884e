//! Infinite scrolling background.
//!
//! [`InfiniteScrollingBackground`] tiles an ordered list of images across a
//! scene and schedules looping motions on them so the scene appears to scroll
//! forever in one [`ScrollDirection`].
//!
//! # Tiling and timing
//!
//! With `N` images of extent `e` along the scroll axis, moving with sign `s`
//! and a per-tile duration `d`:
//!
//! - image `i` starts at `e/2 - s·i·e`, right behind image `i - 1`;
//! - it first moves to the exit offset `e/2 + s·e` over `d·(i + 1)`;
//! - then teleports to the wrap offset `e/2 - s·(N-1)·e`;
//! - then forever moves to the exit offset over `d·N` and teleports back.
//!
//! Every image travels at `e/d` units per second, so the images stay exactly
//! one extent apart and the teleport happens while the image is fully outside
//! the visible region.
//!
//! # Example
//!
//! ```ignore
//! let images = [
//!     BackgroundImage::new("bg1", 640.0, 360.0),
//!     BackgroundImage::new("bg2", 640.0, 360.0),
//! ];
//! let scroller = InfiniteScrollingBackground::new(
//!     &mut world, &images, scene, ScrollDirection::Bottom, 3.0,
//! )?;
//! scroller.scroll(&mut world);
//! scroller.set_z_index(&mut world, 1);
//! ```

pub mod direction;
pub mod error;
pub mod scenegraph;
pub mod speed;

use std::fmt;

use bevy_ecs::world::World;
use log::{debug, error, info, warn};
use raylib::prelude::Vector2;

use crate::components::playback::MAX_PLAYBACK_SPEED;
use crate::components::sceneframe::SceneFrame;
use crate::components::scrollmotion::{MoveTo, ScrollMotion};

pub use direction::{Axis, ScrollDirection};
pub use error::ScrollerError;
pub use scenegraph::{Appearance, BackgroundImage, SceneGraph};
pub use speed::TransitionSpeed;

/// Display size of every node: the scene's frame width, with a height keeping
/// the aspect ratio of `image`.
///
/// The same formula is used for every scroll direction.
pub fn sprite_size(frame: &SceneFrame, image: &BackgroundImage) -> Result<Vector2, ScrollerError> {
    let aspect = image
        .aspect_ratio()
        .ok_or_else(|| ScrollerError::InvalidImageSize(image.key.clone()))?;
    let width = frame.width;
    Ok(Vector2 {
        x: width,
        y: width / aspect,
    })
}

/// Starting position and motion computed for one node.
#[derive(Clone, Debug)]
pub struct TilePlan {
    pub start: Vector2,
    pub motion: ScrollMotion,
}

/// Everything [`InfiniteScrollingBackground::scroll`] is about to apply.
#[derive(Clone, Debug)]
pub struct ScrollPlan {
    pub axis: Axis,
    /// Node size along the scroll axis.
    pub extent: f32,
    /// Seconds to cross one extent.
    pub tile_duration: f32,
    pub tiles: Vec<TilePlan>,
}

impl ScrollPlan {
    /// Lay out `count` tiles of `size` scrolling in `direction` inside a scene
    /// of `scene_size`.
    pub fn compute(
        direction: ScrollDirection,
        speed: TransitionSpeed,
        count: usize,
        size: Vector2,
        scene_size: Vector2,
    ) -> Self {
        let axis = direction.axis();
        let sign = direction.sign();
        let extent = axis.component(size);
        let across = axis.cross().component(scene_size) / 2.0;
        let tile_duration = speed.tile_duration();

        let half = extent / 2.0;
        let exit = half + sign * extent;
        let wrap = half - sign * (count.saturating_sub(1) as f32) * extent;
        let loop_duration = tile_duration * count as f32;

        let tiles = (0..count)
            .map(|i| {
                let start = half - sign * i as f32 * extent;
                let motion = ScrollMotion::new(axis)
                    .with_entry([
                        MoveTo::new(exit, tile_duration * (i + 1) as f32),
                        MoveTo::teleport(wrap),
                    ])
                    .with_cycle([MoveTo::new(exit, loop_duration), MoveTo::teleport(wrap)]);
                TilePlan {
                    start: axis.point(start, across),
                    motion,
                }
            })
            .collect();

        ScrollPlan {
            axis,
            extent,
            tile_duration,
            tiles,
        }
    }
}

/// A set of nodes tiled across a scene and scrolled forever.
///
/// The scroller exclusively owns its nodes and only borrows its scene: the
/// scene handle is checked for liveness on every use.
pub struct InfiniteScrollingBackground<G: SceneGraph = World> {
    nodes: Vec<G::Node>,
    scene: G::Scene,
    direction: ScrollDirection,
    transition_speed: TransitionSpeed,
    sprite_size: Vector2,
}

impl<G: SceneGraph> fmt::Debug for InfiniteScrollingBackground<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfiniteScrollingBackground")
            .field("nodes", &self.nodes)
            .field("scene", &self.scene)
            .field("direction", &self.direction)
            .field("transition_speed", &self.transition_speed)
            .field("sprite_size", &(self.sprite_size.x, self.sprite_size.y))
            .finish()
    }
}

impl<G: SceneGraph> InfiniteScrollingBackground<G> {
    /// Create the nodes for `images` inside `graph`.
    ///
    /// - `images`: at least 2 images, the first one decides the aspect ratio
    /// - `scene`: the scene the nodes will be attached to on [`scroll`](Self::scroll)
    /// - `direction`: where the images travel
    /// - `transition_speed`: in `(0, 100]`, the higher the faster
    ///
    /// Nothing is created when validation fails; the failure is also logged.
    pub fn new(
        graph: &mut G,
        images: &[BackgroundImage],
        scene: G::Scene,
        direction: ScrollDirection,
        transition_speed: f32,
    ) -> Result<Self, ScrollerError> {
        Self::build(graph, images, scene, direction, transition_speed).inspect_err(|e| {
            error!("InfiniteScrollingBackground Initialization Error - {}", e);
        })
    }

    fn build(
        graph: &mut G,
        images: &[BackgroundImage],
        scene: G::Scene,
        direction: ScrollDirection,
        transition_speed: f32,
    ) -> Result<Self, ScrollerError> {
        if images.len() < 2 {
            return Err(ScrollerError::NotEnoughImages(images.len()));
        }
        let transition_speed = TransitionSpeed::new(transition_speed)?;
        let frame = graph
            .scene_frame(scene)
            .ok_or_else(|| ScrollerError::SceneUnavailable(format!("{:?}", scene)))?;
        let size = sprite_size(&frame, &images[0])?;

        // Node anchors follow the scene anchor so positions are centered tiles
        // whatever origin the scene uses.
        let anchor = Vector2 {
            x: frame.anchor_x + 0.5,
            y: frame.anchor_y + 0.5,
        };
        let nodes = images
            .iter()
            .enumerate()
            .map(|(index, image)| {
                let node = graph.create_node(image, index, size);
                graph.set_anchor(node, anchor);
                node
            })
            .collect();

        debug!(
            "InfiniteScrollingBackground: {} nodes of {}x{} scrolling {}",
            images.len(),
            size.x,
            size.y,
            direction
        );

        Ok(Self {
            nodes,
            scene,
            direction,
            transition_speed,
            sprite_size: size,
        })
    }

    /// Layout and motions for the current scene size.
    ///
    /// When the scene is gone the cross-axis coordinate falls back to zero.
    pub fn plan(&self, graph: &G) -> ScrollPlan {
        let scene_size = graph
            .scene_frame(self.scene)
            .map_or(Vector2 { x: 0.0, y: 0.0 }, |f| f.size());
        ScrollPlan::compute(
            self.direction,
            self.transition_speed,
            self.nodes.len(),
            self.sprite_size,
            scene_size,
        )
    }

    /// Place every node at its tiled start and schedule its looping motion.
    ///
    /// Calling it again restarts the scroll from the tiled layout: running
    /// motions are replaced, not stacked. Nodes are attached to the scene
    /// unless the scene no longer exists.
    pub fn scroll(&self, graph: &mut G) {
        let plan = self.plan(graph);
        let scene_alive = graph.scene_frame(self.scene).is_some();
        if !scene_alive {
            warn!(
                "InfiniteScrollingBackground: scene {:?} is gone, nodes stay detached",
                self.scene
            );
        }

        for (node, tile) in self.nodes.iter().zip(plan.tiles) {
            debug!(
                "scheduling {:?} from ({:.1}, {:.1}), entry {:.3}s",
                node,
                tile.start.x,
                tile.start.y,
                tile.motion.entry_duration()
            );
            graph.set_position(*node, tile.start);
            graph.schedule(*node, tile.motion);
            if scene_alive {
                graph.add_to_scene(self.scene, *node);
            }
        }

        info!(
            "Scrolling {} background images {} ({:.3}s per tile)",
            self.nodes.len(),
            self.direction,
            plan.tile_duration
        );
    }

    /// Cancel every node's motion, leaving the nodes in place.
    pub fn stop(&self, graph: &mut G) {
        for node in &self.nodes {
            if graph.cancel(*node) {
                if let Some(pos) = graph.position(*node) {
                    debug!("stopped {:?} at ({:.1}, {:.1})", node, pos.x, pos.y);
                }
            }
        }
    }

    /// Current position of every live node, in node order.
    pub fn positions(&self, graph: &G) -> Vec<Vector2> {
        self.nodes
            .iter()
            .filter_map(|node| graph.position(*node))
            .collect()
    }

    pub fn nodes(&self) -> &[G::Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn scene(&self) -> G::Scene {
        self.scene
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn transition_speed(&self) -> TransitionSpeed {
        self.transition_speed
    }

    /// Size shared by every node.
    pub fn sprite_size(&self) -> Vector2 {
        self.sprite_size
    }

    // Bulk accessors: getters read the first node, setters write every node.

    fn first_appearance(&self, graph: &G) -> Option<Appearance> {
        self.nodes.first().and_then(|node| graph.appearance(*node))
    }

    fn update_all(&self, graph: &mut G, mut f: impl FnMut(&mut Appearance)) {
        for node in &self.nodes {
            graph.update_appearance(*node, &mut f);
        }
    }

    pub fn z_index(&self, graph: &G) -> Option<i32> {
        self.first_appearance(graph).map(|a| a.z_index)
    }

    pub fn set_z_index(&self, graph: &mut G, z_index: i32) {
        self.update_all(graph, |a| a.z_index = z_index);
    }

    pub fn alpha(&self, graph: &G) -> Option<f32> {
        self.first_appearance(graph).map(|a| a.alpha)
    }

    /// Opacity, clamped to `0.0..=1.0`.
    pub fn set_alpha(&self, graph: &mut G, alpha: f32) {
        let alpha = alpha.clamp(0.0, 1.0);
        self.update_all(graph, |a| a.alpha = alpha);
    }

    pub fn is_paused(&self, graph: &G) -> Option<bool> {
        self.first_appearance(graph).map(|a| a.paused)
    }

    pub fn set_paused(&self, graph: &mut G, paused: bool) {
        self.update_all(graph, |a| a.paused = paused);
    }

    /// Motion playback multiplier of the nodes.
    pub fn speed(&self, graph: &G) -> Option<f32> {
        self.first_appearance(graph).map(|a| a.speed)
    }

    /// Clamped to `0.0..=MAX_PLAYBACK_SPEED`. Non-finite values are ignored.
    pub fn set_speed(&self, graph: &mut G, speed: f32) {
        if !speed.is_finite() {
            warn!("InfiniteScrollingBackground: ignoring playback speed {}", speed);
            return;
        }
        let speed = speed.clamp(0.0, MAX_PLAYBACK_SPEED);
        self.update_all(graph, |a| a.speed = speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::scrollmotion::MotionPhase;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// In-memory scene graph recording what the scroller asks for.
    #[derive(Default)]
    struct RecordingGraph {
        frame: Option<SceneFrame>,
        nodes: Vec<RecordedNode>,
    }

    #[derive(Clone, Debug)]
    struct RecordedNode {
        key: String,
        size: Vector2,
        anchor: Vector2,
        pos: Vector2,
        motion: Option<ScrollMotion>,
        schedules: usize,
        attached: bool,
        appearance: Appearance,
    }

    impl RecordingGraph {
        fn with_scene(width: f32, height: f32) -> Self {
            Self {
                frame: Some(SceneFrame::new(width, height)),
                nodes: Vec::new(),
            }
        }
    }

    impl SceneGraph for RecordingGraph {
        type Node = usize;
        type Scene = ();

        fn scene_frame(&self, _scene: ()) -> Option<SceneFrame> {
            self.frame
        }

        fn create_node(&mut self, image: &BackgroundImage, _index: usize, size: Vector2) -> usize {
            self.nodes.push(RecordedNode {
                key: image.key.clone(),
                size,
                anchor: Vector2 { x: 0.0, y: 0.0 },
                pos: Vector2 { x: 0.0, y: 0.0 },
                motion: None,
                schedules: 0,
                attached: false,
                appearance: Appearance::default(),
            });
            self.nodes.len() - 1
        }

        fn set_anchor(&mut self, node: usize, anchor: Vector2) -> bool {
            self.nodes[node].anchor = anchor;
            true
        }

        fn set_position(&mut self, node: usize, pos: Vector2) -> bool {
            self.nodes[node].pos = pos;
            true
        }

        fn position(&self, node: usize) -> Option<Vector2> {
            self.nodes.get(node).map(|n| n.pos)
        }

        fn schedule(&mut self, node: usize, motion: ScrollMotion) -> bool {
            self.nodes[node].motion = Some(motion);
            self.nodes[node].schedules += 1;
            true
        }

        fn cancel(&mut self, node: usize) -> bool {
            self.nodes[node].motion = None;
            true
        }

        fn add_to_scene(&mut self, _scene: (), node: usize) -> bool {
            if self.frame.is_none() {
                return false;
            }
            self.nodes[node].attached = true;
            true
        }

        fn appearance(&self, node: usize) -> Option<Appearance> {
            self.nodes.get(node).map(|n| n.appearance)
        }

        fn update_appearance(&mut self, node: usize, f: &mut dyn FnMut(&mut Appearance)) -> bool {
            f(&mut self.nodes[node].appearance);
            true
        }
    }

    fn images(n: usize) -> Vec<BackgroundImage> {
        (0..n)
            .map(|i| BackgroundImage::new(format!("bg{}", i), 400.0, 200.0))
            .collect()
    }

    // ==================== CONSTRUCTION ====================

    #[test]
    fn test_new_creates_one_node_per_image() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(3), (), ScrollDirection::Bottom, 3.0)
            .unwrap();
        assert_eq!(bg.len(), 3);
        assert_eq!(g.nodes.len(), 3);
        let keys: Vec<_> = g.nodes.iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, ["bg0", "bg1", "bg2"]);
    }

    #[test]
    fn test_new_sizes_every_node_from_scene_width_and_first_aspect() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let mut imgs = images(2);
        imgs[1] = BackgroundImage::new("tall", 100.0, 900.0);
        InfiniteScrollingBackground::new(&mut g, &imgs, (), ScrollDirection::Left, 10.0).unwrap();
        for node in &g.nodes {
            assert!(approx_eq(node.size.x, 800.0));
            assert!(approx_eq(node.size.y, 400.0));
        }
    }

    #[test]
    fn test_new_rejects_single_image() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        for dir in ScrollDirection::ALL {
            let err = InfiniteScrollingBackground::new(&mut g, &images(1), (), dir, 3.0).unwrap_err();
            assert_eq!(err, ScrollerError::NotEnoughImages(1));
            assert!(err.to_string().contains("at least 2 images"));
        }
        assert!(g.nodes.is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_speed() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        for speed in [0.0, -2.0, 150.0, f32::NAN] {
            let err = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Top, speed)
                .unwrap_err();
            assert!(matches!(err, ScrollerError::InvalidTransitionSpeed(_)));
            assert!(err.to_string().contains("transitionSpeed"));
        }
        assert!(g.nodes.is_empty());
    }

    #[test]
    fn test_new_rejects_missing_scene() {
        let mut g = RecordingGraph::default();
        let err = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Top, 3.0)
            .unwrap_err();
        assert!(matches!(err, ScrollerError::SceneUnavailable(_)));
        assert!(g.nodes.is_empty());
    }

    #[test]
    fn test_new_rejects_degenerate_first_image() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let mut imgs = images(2);
        imgs[0] = BackgroundImage::new("empty", 0.0, 0.0);
        let err = InfiniteScrollingBackground::new(&mut g, &imgs, (), ScrollDirection::Top, 3.0)
            .unwrap_err();
        assert_eq!(err, ScrollerError::InvalidImageSize("empty".to_string()));
        assert!(g.nodes.is_empty());
    }

    #[test]
    fn test_new_anchors_follow_scene_anchor() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Top, 3.0).unwrap();
        for node in &g.nodes {
            assert!(approx_eq(node.anchor.x, 0.5));
            assert!(approx_eq(node.anchor.y, 0.5));
        }

        let mut g = RecordingGraph {
            frame: Some(SceneFrame::new(800.0, 600.0).with_anchor(0.5, 0.5)),
            nodes: Vec::new(),
        };
        InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Top, 3.0).unwrap();
        for node in &g.nodes {
            assert!(approx_eq(node.anchor.x, 1.0));
            assert!(approx_eq(node.anchor.y, 1.0));
        }
    }

    // ==================== SCROLL PLAN ====================

    #[test]
    fn test_plan_tiles_are_one_extent_apart_for_every_direction() {
        for dir in ScrollDirection::ALL {
            let mut g = RecordingGraph::with_scene(800.0, 600.0);
            let bg = InfiniteScrollingBackground::new(&mut g, &images(4), (), dir, 5.0).unwrap();
            let plan = bg.plan(&g);
            let axis = dir.axis();
            for pair in plan.tiles.windows(2) {
                let a = axis.component(pair[0].start);
                let b = axis.component(pair[1].start);
                assert!(
                    approx_eq((a - b).abs(), plan.extent),
                    "{}: {} and {} are not one extent ({}) apart",
                    dir,
                    a,
                    b,
                    plan.extent
                );
                // Later tiles queue up behind earlier ones.
                assert!(approx_eq(b, a - dir.sign() * plan.extent));
            }
        }
    }

    #[test]
    fn test_plan_extent_follows_axis() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Right, 5.0)
            .unwrap();
        assert!(approx_eq(bg.plan(&g).extent, 800.0));

        let bg = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Top, 5.0)
            .unwrap();
        assert!(approx_eq(bg.plan(&g).extent, 400.0));
    }

    #[test]
    fn test_plan_right_matches_reference_offsets() {
        let speed = TransitionSpeed::new(10.0).unwrap();
        let plan = ScrollPlan::compute(
            ScrollDirection::Right,
            speed,
            3,
            Vector2 { x: 100.0, y: 50.0 },
            Vector2 { x: 100.0, y: 80.0 },
        );
        let starts: Vec<_> = plan.tiles.iter().map(|t| t.start.x).collect();
        assert!(approx_eq(starts[0], 50.0));
        assert!(approx_eq(starts[1], -50.0));
        assert!(approx_eq(starts[2], -150.0));
        for tile in &plan.tiles {
            assert!(approx_eq(tile.start.y, 40.0)); // scene height / 2
            assert!(approx_eq(tile.motion.entry[0].target, 150.0));
            assert!(approx_eq(tile.motion.entry[1].target, -150.0));
            assert!(tile.motion.entry[1].is_teleport());
            assert!(approx_eq(tile.motion.cycle[0].target, 150.0));
            assert!(approx_eq(tile.motion.cycle[0].duration, 15.0));
            assert!(approx_eq(tile.motion.cycle[1].target, -150.0));
        }
    }

    #[test]
    fn test_plan_left_and_top_mirror_right_and_bottom() {
        let speed = TransitionSpeed::new(10.0).unwrap();
        let size = Vector2 { x: 100.0, y: 50.0 };
        let scene = Vector2 { x: 100.0, y: 80.0 };
        let left = ScrollPlan::compute(ScrollDirection::Left, speed, 3, size, scene);
        assert!(approx_eq(left.tiles[1].start.x, 150.0));
        assert!(approx_eq(left.tiles[0].motion.entry[0].target, -50.0));
        assert!(approx_eq(left.tiles[0].motion.entry[1].target, 250.0));

        let top = ScrollPlan::compute(ScrollDirection::Top, speed, 3, size, scene);
        assert_eq!(top.axis, Axis::Vertical);
        assert!(approx_eq(top.tiles[2].start.y, 25.0 + 100.0));
        assert!(approx_eq(top.tiles[2].start.x, 50.0)); // scene width / 2
        assert!(approx_eq(top.tiles[0].motion.entry[0].target, -25.0));
    }

    #[test]
    fn test_plan_entry_durations_strictly_increase() {
        let speed = TransitionSpeed::new(25.0).unwrap();
        let plan = ScrollPlan::compute(
            ScrollDirection::Bottom,
            speed,
            5,
            Vector2 { x: 10.0, y: 10.0 },
            Vector2 { x: 10.0, y: 10.0 },
        );
        for (i, tile) in plan.tiles.iter().enumerate() {
            assert!(approx_eq(tile.motion.entry_duration(), 2.0 * (i + 1) as f32));
            assert!(approx_eq(tile.motion.cycle_duration(), 10.0));
        }
        for pair in plan.tiles.windows(2) {
            assert!(pair[0].motion.entry_duration() < pair[1].motion.entry_duration());
        }
    }

    #[test]
    fn test_plan_tiles_share_one_velocity() {
        let speed = TransitionSpeed::new(4.0).unwrap();
        let plan = ScrollPlan::compute(
            ScrollDirection::Right,
            speed,
            4,
            Vector2 { x: 60.0, y: 30.0 },
            Vector2 { x: 60.0, y: 30.0 },
        );
        let expected = plan.extent / plan.tile_duration;
        for tile in &plan.tiles {
            let entry = tile.motion.entry[0];
            let entry_speed = (entry.target - tile.start.x).abs() / entry.duration;
            assert!(approx_eq(entry_speed, expected));

            let wrap = tile.motion.entry[1].target;
            let cycle = tile.motion.cycle[0];
            let cycle_speed = (cycle.target - wrap).abs() / cycle.duration;
            assert!(approx_eq(cycle_speed, expected));
        }
    }

    // ==================== SCROLL ====================

    #[test]
    fn test_scroll_places_schedules_and_attaches() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Bottom, 3.0)
            .unwrap();
        bg.scroll(&mut g);

        let plan = bg.plan(&g);
        for (node, tile) in g.nodes.iter().zip(&plan.tiles) {
            assert!(node.attached);
            assert!(approx_eq(node.pos.x, tile.start.x));
            assert!(approx_eq(node.pos.y, tile.start.y));
            let motion = node.motion.as_ref().unwrap();
            assert_eq!(motion.phase, MotionPhase::Entry);
            assert_eq!(motion.axis, Axis::Vertical);
        }
    }

    #[test]
    fn test_scroll_twice_replaces_motions() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(3), (), ScrollDirection::Left, 3.0)
            .unwrap();
        bg.scroll(&mut g);
        g.nodes[0].pos = Vector2 { x: -999.0, y: 0.0 };
        bg.scroll(&mut g);

        assert!(approx_eq(g.nodes[0].pos.x, 400.0));
        for node in &g.nodes {
            assert_eq!(node.schedules, 2);
            assert!(node.motion.is_some());
        }
    }

    #[test]
    fn test_scroll_without_scene_skips_attachment() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Right, 3.0)
            .unwrap();
        g.frame = None;
        bg.scroll(&mut g);
        for node in &g.nodes {
            assert!(!node.attached);
            assert!(node.motion.is_some());
            assert!(approx_eq(node.pos.y, 0.0));
        }
    }

    #[test]
    fn test_stop_cancels_every_motion() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Right, 3.0)
            .unwrap();
        bg.scroll(&mut g);
        g.nodes[1].pos = Vector2 { x: 12.0, y: 34.0 };
        bg.stop(&mut g);
        assert!(g.nodes.iter().all(|n| n.motion.is_none()));

        let positions = bg.positions(&g);
        assert_eq!(positions.len(), 2);
        assert!(approx_eq(positions[1].x, 12.0));
        assert!(approx_eq(positions[1].y, 34.0));
    }

    // ==================== BULK ACCESSORS ====================

    #[test]
    fn test_bulk_setters_apply_to_every_node() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(3), (), ScrollDirection::Top, 3.0)
            .unwrap();

        bg.set_z_index(&mut g, 7);
        bg.set_alpha(&mut g, 0.25);
        bg.set_paused(&mut g, true);
        bg.set_speed(&mut g, 2.5);

        for node in &g.nodes {
            assert_eq!(node.appearance.z_index, 7);
            assert!(approx_eq(node.appearance.alpha, 0.25));
            assert!(node.appearance.paused);
            assert!(approx_eq(node.appearance.speed, 2.5));
        }
        assert_eq!(bg.z_index(&g), Some(7));
        assert_eq!(bg.is_paused(&g), Some(true));
        assert!(approx_eq(bg.alpha(&g).unwrap(), 0.25));
        assert!(approx_eq(bg.speed(&g).unwrap(), 2.5));
    }

    #[test]
    fn test_getters_read_first_node() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Top, 3.0)
            .unwrap();
        g.nodes[0].appearance.z_index = 3;
        g.nodes[1].appearance.z_index = 9;
        assert_eq!(bg.z_index(&g), Some(3));
    }

    #[test]
    fn test_setters_clamp_values() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Top, 3.0)
            .unwrap();
        bg.set_alpha(&mut g, 4.0);
        bg.set_speed(&mut g, -1.0);
        assert!(approx_eq(bg.alpha(&g).unwrap(), 1.0));
        assert!(approx_eq(bg.speed(&g).unwrap(), 0.0));

        bg.set_speed(&mut g, 1e10);
        assert!(approx_eq(bg.speed(&g).unwrap(), MAX_PLAYBACK_SPEED));
    }

    #[test]
    fn test_set_speed_ignores_non_finite() {
        let mut g = RecordingGraph::with_scene(800.0, 600.0);
        let bg = InfiniteScrollingBackground::new(&mut g, &images(2), (), ScrollDirection::Top, 3.0)
            .unwrap();
        bg.set_speed(&mut g, 2.0);
        bg.set_speed(&mut g, f32::INFINITY);
        bg.set_speed(&mut g, f32::NAN);
        assert!(approx_eq(bg.speed(&g).unwrap(), 2.0));
    }
}
