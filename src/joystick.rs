use std::time::{Duration, Instant};

use cgmath::{vec2, Deg, InnerSpace, Point2, Rad, Vector2};

use crate::{
    config::settings::Settings,
    geometry::{clamp_to, Rect},
    report::{compass, Monitor, PolarReport, XyReport},
    touch::{DoubleTap, TapThresholds, TouchEvent, TouchId, TouchPhase, TouchTracker},
};

/// On-screen joystick driven by a single touch.
///
/// Three coordinate spaces are involved:
/// - the shared space touch events are delivered in,
/// - the surface space, the host surface hosting the stick, framed by `surface` in
///   the shared space. `base_center` and `movable_bounds` live here.
/// - the local space of the stick itself, origin at the top-left of its `bounds`,
///   the base sitting at its middle. `handle_center` and `handle_constraint` live
///   here.
pub struct Joystick {
    surface: Rect,
    bounds: Vector2<f64>,
    base_center: Point2<f64>,
    handle_center: Point2<f64>,
    travel: f64,

    movable: bool,
    movable_origin: Option<Point2<f64>>,
    movable_bounds: Option<Rect>,
    handle_constraint: Option<Rect>,

    displacement: f64,
    bearing: Deg<f64>,

    monitor: Monitor,
    on_tap: Option<Box<dyn FnMut()>>,

    tracker: TouchTracker,
    double_tap: DoubleTap,
    double_tap_reset: bool,
}

impl Joystick {
    pub fn new(surface: Rect, base_center: Point2<f64>, bounds: Vector2<f64>) -> Self {
        Self {
            surface,
            bounds,
            base_center,
            handle_center: Rect::from_size(bounds).mid(),
            travel: 1.,
            movable: false,
            movable_origin: None,
            movable_bounds: None,
            handle_constraint: None,
            displacement: 0.,
            bearing: Deg(0.),
            monitor: Monitor::None,
            on_tap: None,
            tracker: TouchTracker::default(),
            double_tap: DoubleTap::default(),
            double_tap_reset: true,
        }
    }

    /// Places the stick on its surface. The handle goes back to rest, nothing is reported.
    pub fn layout(&mut self, base_center: Point2<f64>, bounds: Vector2<f64>) {
        self.base_center = base_center;
        self.bounds = bounds;
        self.handle_center = self.local_mid();
        self.displacement = 0.;
        self.bearing = Deg(0.);
    }

    pub fn set_surface(&mut self, surface: Rect) {
        self.surface = surface;
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        let stick = &settings.stick;
        self.travel = stick.travel;
        self.movable = stick.movable;
        self.movable_bounds = stick.movable_bounds;
        self.handle_constraint = stick.handle_constraint;
        let tap = &settings.tap;
        self.tracker.thresholds = TapThresholds {
            max_duration: tap.max_duration,
            max_distance: tap.max_distance,
        };
        self.double_tap_reset = tap.double_tap_reset;
        self.double_tap.interval = tap.double_tap_interval;
    }

    /// How far the handle may travel relative to the base radius.
    ///
    /// Values above 1 let the handle leave the visible base.
    pub fn set_travel(&mut self, travel: f64) {
        self.travel = travel;
    }

    pub fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }

    /// Restricts where the base center may go, in surface space.
    pub fn set_movable_bounds(&mut self, bounds: Option<Rect>) {
        self.movable_bounds = bounds;
    }

    /// Restricts where the handle center may go, in local space.
    ///
    /// For a 100x100 stick, `Rect::new(50., 0., 0., 100.)` only allows vertical moves.
    pub fn set_handle_constraint(&mut self, constraint: Option<Rect>) {
        self.handle_constraint = constraint;
    }

    /// Replaces the current monitor.
    pub fn set_monitor(&mut self, monitor: Monitor) {
        self.monitor = monitor;
    }

    pub fn set_polar_monitor(&mut self, f: impl FnMut(PolarReport) + 'static) {
        self.monitor = Monitor::polar(f);
    }

    pub fn set_xy_monitor(&mut self, f: impl FnMut(XyReport) + 'static) {
        self.monitor = Monitor::xy(f);
    }

    pub fn clear_monitor(&mut self) {
        self.monitor = Monitor::None;
    }

    /// Called once per recognized tap, after the release report.
    pub fn set_on_tap(&mut self, f: impl FnMut() + 'static) {
        self.on_tap = Some(Box::new(f));
    }

    pub fn set_tap_thresholds(&mut self, thresholds: TapThresholds) {
        self.tracker.thresholds = thresholds;
    }

    pub fn set_double_tap_reset(&mut self, enabled: bool) {
        self.double_tap_reset = enabled;
    }

    pub fn set_double_tap_interval(&mut self, interval: Duration) {
        self.double_tap.interval = interval;
    }

    /// Last reported direction, 0° when the handle is at rest.
    pub fn angle(&self) -> Deg<f64> {
        self.bearing
    }

    /// Last reported distance of the handle from the base over the radius.
    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    pub fn radius(&self) -> f64 {
        self.bounds.x.min(self.bounds.y) / 2. * self.travel
    }

    pub fn movable(&self) -> bool {
        self.movable
    }

    pub fn bounds(&self) -> Vector2<f64> {
        self.bounds
    }

    pub fn base_center(&self) -> Point2<f64> {
        self.base_center
    }

    pub fn handle_center(&self) -> Point2<f64> {
        self.handle_center
    }

    pub fn movable_origin(&self) -> Option<Point2<f64>> {
        self.movable_origin
    }

    pub fn is_touched(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn touch(&mut self, event: &TouchEvent, now: Instant) {
        match event.phase {
            TouchPhase::Begin => self.touch_began(event.id, event.location, now),
            TouchPhase::Move => self.touch_moved(event.id, event.location, now),
            TouchPhase::End => self.touch_ended(event.id, event.location, now),
            TouchPhase::Cancel => self.touch_cancelled(event.id, event.location, now),
        }
    }

    pub fn touch_began(&mut self, id: TouchId, location: Point2<f64>, now: Instant) {
        if self.tracker.begin(id, location, now) {
            self.track();
        }
    }

    pub fn touch_moved(&mut self, id: TouchId, location: Point2<f64>, now: Instant) {
        if self.tracker.moved(id, location, now) {
            self.track();
        } else {
            log::debug!("ignoring move of untracked touch {:?}", id);
        }
    }

    pub fn touch_ended(&mut self, id: TouchId, location: Point2<f64>, now: Instant) {
        self.release(id, location, now);
    }

    pub fn touch_cancelled(&mut self, id: TouchId, location: Point2<f64>, now: Instant) {
        self.release(id, location, now);
    }

    fn track(&mut self) {
        if let Some(location) = self.tracker.location_in(&self.surface) {
            self.update_location(location);
        }
    }

    fn release(&mut self, id: TouchId, location: Point2<f64>, now: Instant) {
        let release = match self.tracker.release(id, location, now) {
            Some(release) => release,
            None => return,
        };
        self.home_position();
        if release.was_tap {
            if let Some(on_tap) = self.on_tap.as_mut() {
                on_tap();
            }
            if self.double_tap_reset && self.double_tap.tap(now) {
                self.reset_base_to_origin();
            }
        }
    }

    /// Moves the handle toward `location`, given in surface space, and reports.
    pub fn update_location(&mut self, location: Point2<f64>) {
        if !Rect::from_size(self.surface.size).contains(location) {
            log::debug!("touch at {:?} is off the surface", location);
            return;
        }
        let radius = self.radius();
        if !(radius > 0.) {
            log::debug!("stick radius is {}, ignoring touch", radius);
            return;
        }

        let delta = location - self.base_center;
        let displacement = delta.magnitude() / radius;
        // atan2(dx, dy): 0 straight down, counterclockwise, so that (sin, cos) of it is
        // the unit vector toward `location`.
        let angle = Rad(delta.x.atan2(delta.y));
        let mid = self.local_mid();

        if displacement > 1. {
            if self.movable {
                if self.reposition_base(location, angle) {
                    self.reposition_handle(angle);
                } else {
                    let delta = location - self.base_center;
                    self.handle_center = self.clamp_handle(mid + delta);
                }
            } else {
                self.reposition_handle(angle);
            }
        } else {
            self.handle_center = self.clamp_handle(mid + delta);
        }

        self.report_position();
    }

    /// Drags the base so that `location` sits on its circumference.
    ///
    /// Returns `true` if `movable_bounds` kept the base from getting there.
    fn reposition_base(&mut self, location: Point2<f64>, angle: Rad<f64>) -> bool {
        if self.movable_origin.is_none() {
            self.movable_origin = Some(self.base_center);
        }
        let desired = location - self.circumference(angle);
        self.base_center = clamp_to(self.movable_bounds.as_ref(), desired);
        self.base_center != desired
    }

    /// Pins the handle on the base circumference.
    fn reposition_handle(&mut self, angle: Rad<f64>) {
        let end = self.local_mid() + self.circumference(angle);
        self.handle_center = self.clamp_handle(end);
    }

    fn circumference(&self, Rad(angle): Rad<f64>) -> Vector2<f64> {
        let radius = self.radius();
        vec2(angle.sin() * radius, angle.cos() * radius)
    }

    /// Reports the handle as it is drawn, after every clamp.
    ///
    /// The displacement is not clamped to 1: constraints can leave the handle outside
    /// the radius.
    fn report_position(&mut self) {
        let delta = self.handle_center - self.local_mid();
        let radius = self.radius();
        let at_rest = delta.magnitude2() == 0. || !(radius > 0.);
        if at_rest {
            self.displacement = 0.;
            self.bearing = Deg(0.);
        } else {
            self.displacement = delta.magnitude() / radius;
            self.bearing = compass(delta);
        }

        let polar = PolarReport {
            angle: self.bearing,
            displacement: self.displacement,
        };
        let xy = if at_rest {
            XyReport::zero()
        } else {
            XyReport {
                x: delta.x / radius,
                y: -delta.y / radius,
            }
        };
        log::trace!("stick report: {}", polar);
        match self.monitor {
            Monitor::None => {}
            Monitor::Polar(ref mut monitor) => monitor(polar),
            Monitor::Xy(ref mut monitor) => monitor(xy),
        }
    }

    /// Puts the handle back on the base center and reports it.
    pub fn home_position(&mut self) {
        self.handle_center = self.local_mid();
        self.report_position();
    }

    /// Moves a dragged base back where it started.
    ///
    /// Does nothing while the handle is pushed halfway or more.
    pub fn reset_base_to_origin(&mut self) {
        if let Some(origin) = self.movable_origin {
            if self.displacement < 0.5 {
                self.base_center = origin;
            }
        }
    }

    fn local_mid(&self) -> Point2<f64> {
        Rect::from_size(self.bounds).mid()
    }

    fn clamp_handle(&self, point: Point2<f64>) -> Point2<f64> {
        clamp_to(self.handle_constraint.as_ref(), point)
    }
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use cgmath::{AbsDiffEq, Angle};

    use super::*;

    const EPS: f64 = 1e-9;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    /// 100x100 stick centered at (50, 50) of a 400x300 surface placed at the shared origin.
    fn stick() -> Joystick {
        Joystick::new(Rect::new(0., 0., 400., 300.), p(50., 50.), vec2(100., 100.))
    }

    fn polar_log(stick: &mut Joystick) -> Rc<RefCell<Vec<PolarReport>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        stick.set_polar_monitor(move |r| sink.borrow_mut().push(r));
        log
    }

    fn xy_log(stick: &mut Joystick) -> Rc<RefCell<Vec<XyReport>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        stick.set_xy_monitor(move |r| sink.borrow_mut().push(r));
        log
    }

    fn assert_polar(report: PolarReport, angle: f64, displacement: f64) {
        assert!(
            report.angle.0.abs_diff_eq(&angle, 1e-6)
                && report.displacement.abs_diff_eq(&displacement, 1e-6),
            "expected {}° {}, got {:?}",
            angle,
            displacement,
            report
        );
    }

    #[test]
    fn radius_from_bounds_and_travel() {
        let mut s = stick();
        assert_eq!(s.radius(), 50.);
        s.layout(p(60., 60.), vec2(120., 80.));
        assert_eq!(s.radius(), 40.);
        s.set_travel(1.5);
        assert_eq!(s.radius(), 60.);
    }

    #[test]
    fn push_up_and_right() {
        let mut s = stick();
        let log = polar_log(&mut s);
        let t0 = Instant::now();
        s.touch_began(TouchId(0), p(50., 50.), t0);
        s.touch_moved(TouchId(0), p(50., 0.), t0);
        s.touch_moved(TouchId(0), p(100., 50.), t0);
        let log = log.borrow();
        assert_eq!(log.len(), 3);
        assert_polar(log[0], 0., 0.);
        assert_polar(log[1], 0., 1.);
        assert_polar(log[2], 90., 1.);
    }

    #[test]
    fn xy_reports_are_normalized() {
        let mut s = stick();
        let log = xy_log(&mut s);
        let t0 = Instant::now();
        s.touch_began(TouchId(0), p(50., 0.), t0);
        s.touch_moved(TouchId(0), p(25., 75.), t0);
        let log = log.borrow();
        assert!(log[0].x.abs_diff_eq(&0., EPS));
        assert!(log[0].y.abs_diff_eq(&1., EPS));
        assert!(log[1].x.abs_diff_eq(&-0.5, EPS));
        assert!(log[1].y.abs_diff_eq(&-0.5, EPS));
    }

    #[test]
    fn linear_inside_radius() {
        let mut s = stick();
        let log = polar_log(&mut s);
        for &(x, y) in &[(60., 50.), (50., 80.), (20., 30.), (71., 12.), (50.5, 49.)] {
            s.update_location(p(x, y));
            let delta = p(x, y) - p(50., 50.);
            let report = *log.borrow().last().unwrap();
            let expected = (Deg(180.) - Deg::from(Rad(delta.x.atan2(delta.y)))).normalize();
            assert_polar(report, expected.0, delta.magnitude() / 50.);
            assert_eq!(s.handle_center(), p(50., 50.) + delta);
        }
    }

    #[test]
    fn handle_pinned_on_circumference() {
        let mut s = stick();
        let log = polar_log(&mut s);
        s.update_location(p(200., 50.));
        assert_polar(log.borrow()[0], 90., 1.);
        assert!(s.handle_center().abs_diff_eq(&p(100., 50.), EPS));
        assert_eq!(s.base_center(), p(50., 50.));

        s.update_location(p(50. - 300., 50. + 400.));
        // off the surface
        assert_eq!(log.borrow().len(), 1);

        s.update_location(p(50. + 90., 50. + 120.));
        let report = log.borrow()[1];
        assert!(report.displacement.abs_diff_eq(&1., EPS));
        assert!(s.handle_center().abs_diff_eq(&p(80., 90.), EPS));
    }

    #[test]
    fn travel_beyond_base() {
        let mut s = stick();
        s.set_travel(2.);
        let log = polar_log(&mut s);
        s.update_location(p(150., 50.));
        assert_polar(log.borrow()[0], 90., 1.);
        assert!(s.handle_center().abs_diff_eq(&p(150., 50.), EPS));
        s.update_location(p(50., 100.));
        assert_polar(log.borrow()[1], 180., 0.5);
    }

    #[test]
    fn release_reports_zero() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;

        let mut s = stick();
        let polar = polar_log(&mut s);
        s.touch_began(TouchId(0), p(90., 90.), t0);
        s.touch_ended(TouchId(0), p(90., 90.), t0 + ms(500));
        assert_eq!(*polar.borrow().last().unwrap(), PolarReport::zero());
        assert_eq!(s.displacement(), 0.);
        assert_eq!(s.angle(), Deg(0.));

        let xy = xy_log(&mut s);
        s.touch_began(TouchId(1), p(10., 20.), t0 + ms(600));
        s.touch_cancelled(TouchId(1), p(10., 20.), t0 + ms(900));
        assert_eq!(xy.borrow().len(), 2);
        assert_eq!(*xy.borrow().last().unwrap(), XyReport::zero());
        assert!(!s.is_touched());
    }

    #[test]
    fn one_report_per_sample() {
        let t0 = Instant::now();
        let mut s = stick();
        let log = polar_log(&mut s);
        s.touch(
            &TouchEvent {
                phase: TouchPhase::Begin,
                id: TouchId(4),
                location: p(40., 40.),
            },
            t0,
        );
        for i in 0..5 {
            s.touch(
                &TouchEvent {
                    phase: TouchPhase::Move,
                    id: TouchId(4),
                    location: p(40. + i as f64, 40.),
                },
                t0,
            );
        }
        // a second finger is not ours
        s.touch_began(TouchId(5), p(10., 10.), t0);
        s.touch_moved(TouchId(5), p(20., 10.), t0);
        s.touch_ended(TouchId(5), p(20., 10.), t0);
        s.touch(
            &TouchEvent {
                phase: TouchPhase::End,
                id: TouchId(4),
                location: p(44., 40.),
            },
            t0,
        );
        assert_eq!(log.borrow().len(), 7);
    }

    #[test]
    fn movable_base_follows() {
        let mut s = stick();
        s.set_movable(true);
        let log = polar_log(&mut s);
        let t0 = Instant::now();
        s.touch_began(TouchId(0), p(50., 50.), t0);
        s.touch_moved(TouchId(0), p(250., 50.), t0);
        assert_eq!(s.movable_origin(), Some(p(50., 50.)));
        assert!(s.base_center().abs_diff_eq(&p(200., 50.), EPS));
        assert_polar(*log.borrow().last().unwrap(), 90., 1.);

        // Inside the moved base, the stick tracks linearly again.
        s.touch_moved(TouchId(0), p(200., 25.), t0);
        assert_polar(*log.borrow().last().unwrap(), 0., 0.5);
        assert!(s.base_center().abs_diff_eq(&p(200., 50.), EPS));

        s.touch_moved(TouchId(0), p(200., 200.), t0);
        assert!(s.base_center().abs_diff_eq(&p(200., 150.), EPS));
        assert_polar(*log.borrow().last().unwrap(), 180., 1.);
        // The first position is kept across moves.
        assert_eq!(s.movable_origin(), Some(p(50., 50.)));
    }

    #[test]
    fn movable_base_blocked_by_bounds() {
        let mut s = stick();
        s.set_movable(true);
        s.set_movable_bounds(Some(Rect::new(0., 0., 120., 300.)));
        let log = polar_log(&mut s);
        s.update_location(p(250., 50.));
        assert!(s.base_center().abs_diff_eq(&p(120., 50.), EPS));
        // The base could not follow, so the handle is pinned at the edge.
        assert!(s.handle_center().abs_diff_eq(&p(100., 50.), EPS));
        assert_polar(*log.borrow().last().unwrap(), 90., 1.);
    }

    #[test]
    fn handle_constraint() {
        let mut s = stick();
        s.set_handle_constraint(Some(Rect::new(50., 0., 0., 100.)));
        let log = polar_log(&mut s);
        s.update_location(p(80., 10.));
        assert_eq!(s.handle_center(), p(50., 10.));
        assert_polar(*log.borrow().last().unwrap(), 0., 0.8);

        s.update_location(p(90., 50.));
        assert_eq!(*log.borrow().last().unwrap(), PolarReport::zero());
    }

    // Reports use the clamped handle, so a constraint lying outside the radius
    // produces displacements above 1. This is kept as is.
    #[test]
    fn clamped_handle_can_report_beyond_one() {
        let mut s = stick();
        s.set_handle_constraint(Some(Rect::new(110., 0., 10., 100.)));
        let log = polar_log(&mut s);
        s.update_location(p(55., 50.));
        assert_eq!(s.handle_center(), p(110., 50.));
        assert_polar(*log.borrow().last().unwrap(), 90., 1.2);
        assert!(s.displacement() > 1.);
    }

    #[test]
    fn zero_size_is_inert() {
        let mut s = Joystick::new(Rect::new(0., 0., 400., 300.), p(50., 50.), vec2(0., 0.));
        let log = polar_log(&mut s);
        let t0 = Instant::now();
        s.touch_began(TouchId(0), p(60., 50.), t0);
        s.touch_moved(TouchId(0), p(70., 80.), t0);
        assert!(log.borrow().is_empty());
        s.touch_ended(TouchId(0), p(70., 80.), t0);
        assert_eq!(*log.borrow(), vec![PolarReport::zero()]);
        assert!(!s.displacement().is_nan());
    }

    #[test]
    fn surface_offset() {
        // The surface sits at (100, 200) in the shared space.
        let mut s = Joystick::new(Rect::new(100., 200., 400., 300.), p(50., 50.), vec2(100., 100.));
        let log = polar_log(&mut s);
        let t0 = Instant::now();
        s.touch_began(TouchId(0), p(150., 200.), t0);
        assert_polar(*log.borrow().last().unwrap(), 0., 1.);
        // Left of the surface.
        s.touch_moved(TouchId(0), p(50., 250.), t0);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn no_monitor_is_silent() {
        let t0 = Instant::now();
        let mut s = stick();
        s.set_movable(true);
        s.touch_moved(TouchId(0), p(1., 1.), t0);
        s.touch_ended(TouchId(0), p(1., 1.), t0);
        s.touch_began(TouchId(0), p(1., 1.), t0);
        s.touch_moved(TouchId(0), p(390., 290.), t0);
        s.touch_cancelled(TouchId(0), p(390., 290.), t0);
        s.reset_base_to_origin();
        assert_eq!(s.displacement(), 0.);
    }

    #[test]
    fn monitor_is_replaced() {
        let mut s = stick();
        let polar = polar_log(&mut s);
        s.update_location(p(60., 50.));
        let xy = xy_log(&mut s);
        s.update_location(p(70., 50.));
        assert_eq!(polar.borrow().len(), 1);
        assert_eq!(xy.borrow().len(), 1);
        s.clear_monitor();
        s.update_location(p(80., 50.));
        assert_eq!(xy.borrow().len(), 1);
    }

    #[test]
    fn taps_and_double_tap_reset() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut s = stick();
        s.set_movable(true);
        let taps = Rc::new(RefCell::new(0));
        let counter = taps.clone();
        s.set_on_tap(move || *counter.borrow_mut() += 1);

        // Drag the base away.
        s.touch_began(TouchId(0), p(50., 50.), t0);
        s.touch_moved(TouchId(0), p(250., 50.), t0 + ms(50));
        s.touch_ended(TouchId(0), p(250., 50.), t0 + ms(300));
        assert_eq!(*taps.borrow(), 0);
        assert!(s.base_center().abs_diff_eq(&p(200., 50.), EPS));

        s.touch_began(TouchId(1), p(200., 50.), t0 + ms(1000));
        s.touch_ended(TouchId(1), p(200.5, 50.), t0 + ms(1050));
        assert_eq!(*taps.borrow(), 1);
        assert!(s.base_center().abs_diff_eq(&p(200., 50.), EPS));

        s.touch_began(TouchId(2), p(200., 50.), t0 + ms(1150));
        s.touch_ended(TouchId(2), p(200., 50.), t0 + ms(1200));
        assert_eq!(*taps.borrow(), 2);
        assert_eq!(s.base_center(), p(50., 50.));
    }

    #[test]
    fn double_tap_reset_can_be_disabled() {
        let t0 = Instant::now();
        let ms = Duration::from_millis;
        let mut s = stick();
        s.set_movable(true);
        s.set_double_tap_reset(false);
        s.update_location(p(250., 50.));
        s.home_position();
        for i in 0..2 {
            let t = t0 + ms(100 * i);
            s.touch_began(TouchId(i), p(200., 50.), t);
            s.touch_ended(TouchId(i), p(200., 50.), t + ms(10));
        }
        assert!(s.base_center().abs_diff_eq(&p(200., 50.), EPS));
    }

    #[test]
    fn reset_needs_small_displacement() {
        let mut s = stick();
        s.set_movable(true);
        s.update_location(p(250., 50.));
        assert!(s.displacement() >= 0.5);
        s.reset_base_to_origin();
        assert!(s.base_center().abs_diff_eq(&p(200., 50.), EPS));

        s.update_location(p(210., 50.));
        s.reset_base_to_origin();
        assert_eq!(s.base_center(), p(50., 50.));
    }

    #[test]
    fn settings_are_applied() {
        let mut settings = Settings::default();
        settings.stick.travel = 0.5;
        settings.stick.movable = true;
        settings.stick.movable_bounds = Some(Rect::new(0., 0., 10., 10.));
        settings.tap.max_duration = Duration::from_millis(20);
        let mut s = stick();
        s.apply_settings(&settings);
        assert_eq!(s.radius(), 25.);
        assert!(s.movable());

        let taps = Rc::new(RefCell::new(0));
        let counter = taps.clone();
        s.set_on_tap(move || *counter.borrow_mut() += 1);
        let t0 = Instant::now();
        s.touch_began(TouchId(0), p(50., 50.), t0);
        s.touch_ended(TouchId(0), p(50., 50.), t0 + Duration::from_millis(50));
        assert_eq!(*taps.borrow(), 0);
    }
}
