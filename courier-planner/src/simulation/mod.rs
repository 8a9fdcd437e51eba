//! The outer loop: pack, pick up, deliver, repeat, then return home.
//!
//! A run moves through [`Phase::Loading`], [`Phase::Delivering`],
//! [`Phase::ReturningHome`] and [`Phase::Done`]. Pools, position and distance
//! are owned by the run and moved into each phase, which hands back the
//! updated values.

mod report;

use courier_core::{
    Catalog, Coordinate, DistanceMetric, GeodesicDistance, LabelledRoute, Order, Restaurant,
    Route, RouteColour,
};

pub use report::{CycleReport, SimulationReport};

use crate::PlanError;
use crate::delivery::deliver;
use crate::packer::{BatchPacker, Packing};
use crate::pickup::{PickupVisit, pickup};

/// Default bag capacity in mass units.
pub const DEFAULT_CAPACITY: u32 = 12_000;

/// Default cap on hill-climb iterations per packing pass.
pub const DEFAULT_MAX_HILL_CLIMB_ITERATIONS: usize = 1_000;

/// Tunables for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Maximum bag mass.
    pub capacity: u32,
    /// Whether a restaurant may serve more than one order.
    pub allow_repeat_visits: bool,
    /// Iteration cap for the batch packer.
    pub max_hill_climb_iterations: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            allow_repeat_visits: true,
            max_hill_climb_iterations: DEFAULT_MAX_HILL_CLIMB_ITERATIONS,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations that cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidConfig`] for a zero capacity or a zero
    /// iteration cap.
    pub const fn validate(&self) -> Result<(), PlanError> {
        if self.capacity == 0 {
            return Err(PlanError::InvalidConfig {
                reason: "capacity must be positive",
            });
        }
        if self.max_hill_climb_iterations == 0 {
            return Err(PlanError::InvalidConfig {
                reason: "max_hill_climb_iterations must be positive",
            });
        }
        Ok(())
    }

    /// The packer configured by these settings.
    #[must_use]
    pub const fn packer(&self) -> BatchPacker {
        BatchPacker::new(self.capacity, self.max_hill_climb_iterations)
    }
}

/// Where a run currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Packing the next batch and collecting it from restaurants.
    Loading,
    /// Carrying a loaded bag to its delivery addresses.
    Delivering,
    /// Heading back to the origin once nothing is pending.
    ReturningHome,
    /// Finished; the report is ready.
    Done,
}

/// Simulates a single courier working through a pool of orders.
///
/// # Examples
/// ```
/// use courier_core::test_support::{PlanarDistance, order, restaurant, specialty};
/// use courier_core::Coordinate;
/// use courier_planner::{Simulation, SimulationConfig};
///
/// # fn main() -> Result<(), courier_planner::PlanError> {
/// let sushi = specialty("Japonesa", 30.0, 300);
/// let simulation = Simulation::new(SimulationConfig::default(), PlanarDistance);
/// let report = simulation.run(
///     Coordinate::new(0.0, 0.0),
///     vec![order(1, &sushi, 0.0, 4.0)],
///     vec![restaurant("Katsumi", &sushi, 3.0, 0.0)],
/// )?;
/// assert_eq!(report.total_distance, 3.0 + 5.0 + 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Simulation<M = GeodesicDistance> {
    config: SimulationConfig,
    metric: M,
}

impl Simulation<GeodesicDistance> {
    /// A simulation measuring geodesic distances in metres.
    #[must_use]
    pub const fn geodesic(config: SimulationConfig) -> Self {
        Self::new(config, GeodesicDistance)
    }
}

impl<M: DistanceMetric> Simulation<M> {
    /// Construct a simulation with an explicit distance metric.
    #[must_use]
    pub const fn new(config: SimulationConfig, metric: M) -> Self {
        Self { config, metric }
    }

    /// Settings used by every run.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validate inputs and prepare a run in its initial phase.
    ///
    /// An empty order pool starts in [`Phase::ReturningHome`].
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidConfig`] for unusable settings,
    /// [`PlanError::CapacityBelowLightestOrder`] when no order can ever fit and
    /// [`PlanError::OrderExceedsCapacity`] when some order never fits.
    pub fn start(
        &self,
        origin: Coordinate,
        orders: Vec<Order>,
        restaurants: Vec<Restaurant>,
    ) -> Result<SimulationRun<'_, M>, PlanError> {
        self.config.validate()?;
        let capacity = self.config.capacity;
        if let Some(lightest) = orders.iter().map(Order::mass).min()
            && capacity < lightest
        {
            return Err(PlanError::CapacityBelowLightestOrder { capacity, lightest });
        }
        if let Some(heavy) = orders.iter().find(|order| order.mass() > capacity) {
            return Err(PlanError::OrderExceedsCapacity {
                order_id: heavy.id,
                mass: heavy.mass(),
                capacity,
            });
        }

        let state = if orders.is_empty() {
            State::ReturningHome
        } else {
            State::Loading
        };
        log::info!(
            "starting simulation with {} orders, {} restaurants and capacity {capacity}",
            orders.len(),
            restaurants.len()
        );
        Ok(SimulationRun {
            simulation: self,
            state,
            origin,
            position: origin,
            pending: orders,
            restaurants,
            total_distance: 0.0,
            cycles: Vec::new(),
        })
    }

    /// Run to completion.
    ///
    /// # Errors
    ///
    /// Propagates any [`PlanError`] raised by [`Simulation::start`] or by a
    /// phase; the run is abandoned without a report.
    pub fn run(
        &self,
        origin: Coordinate,
        orders: Vec<Order>,
        restaurants: Vec<Restaurant>,
    ) -> Result<SimulationReport, PlanError> {
        self.start(origin, orders, restaurants)?.finish()
    }

    /// Run over every order and restaurant in `catalog`.
    ///
    /// # Errors
    ///
    /// See [`Simulation::run`].
    pub fn run_catalog(&self, catalog: Catalog) -> Result<SimulationReport, PlanError> {
        let (origin, orders, restaurants) = catalog.into_parts();
        self.run(origin, orders, restaurants)
    }
}

#[derive(Debug)]
enum State {
    Loading,
    Delivering {
        bag: Vec<Order>,
        cycle: CycleDraft,
    },
    ReturningHome,
    Done {
        return_home: LabelledRoute,
    },
}

/// A cycle whose delivery route is not yet known.
#[derive(Debug)]
struct CycleDraft {
    index: usize,
    scheduled: Vec<u64>,
    bag_mass: u32,
    visits: Vec<PickupVisit>,
    pickup: LabelledRoute,
}

/// A simulation in progress, advanced one phase at a time.
///
/// Each [`SimulationRun::step`] consumes the run and returns it in its next
/// phase, so a failed step leaves nothing behind to resume.
#[derive(Debug)]
pub struct SimulationRun<'a, M> {
    simulation: &'a Simulation<M>,
    state: State,
    origin: Coordinate,
    position: Coordinate,
    pending: Vec<Order>,
    restaurants: Vec<Restaurant>,
    total_distance: f64,
    cycles: Vec<CycleReport>,
}

impl<M: DistanceMetric> SimulationRun<'_, M> {
    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        match self.state {
            State::Loading => Phase::Loading,
            State::Delivering { .. } => Phase::Delivering,
            State::ReturningHome => Phase::ReturningHome,
            State::Done { .. } => Phase::Done,
        }
    }

    /// Current courier position.
    #[must_use]
    pub const fn position(&self) -> Coordinate {
        self.position
    }

    /// Distance travelled so far.
    #[must_use]
    pub const fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Orders not yet packed into any bag.
    #[must_use]
    pub fn pending(&self) -> &[Order] {
        &self.pending
    }

    /// Orders currently carried; empty outside [`Phase::Delivering`].
    #[must_use]
    pub fn bag(&self) -> &[Order] {
        match &self.state {
            State::Delivering { bag, .. } => bag.as_slice(),
            State::Loading | State::ReturningHome | State::Done { .. } => &[],
        }
    }

    /// Restaurants still available.
    #[must_use]
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Cycles completed so far.
    #[must_use]
    pub fn cycles(&self) -> &[CycleReport] {
        &self.cycles
    }

    /// Advance by one phase. Stepping a finished run is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the [`PlanError`] raised by the phase being executed.
    pub fn step(mut self) -> Result<Self, PlanError> {
        self.state = match std::mem::replace(&mut self.state, State::Loading) {
            State::Loading => self.load_batch()?,
            State::Delivering { bag, cycle } => self.deliver_batch(bag, cycle)?,
            State::ReturningHome => self.head_home(),
            done @ State::Done { .. } => done,
        };
        Ok(self)
    }

    /// Step until [`Phase::Done`] and build the report.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlanError`] raised by any phase.
    pub fn finish(self) -> Result<SimulationReport, PlanError> {
        let mut run = self;
        loop {
            match run.state {
                State::Done { return_home } => {
                    log::info!(
                        "simulation finished after {} cycles, {:.2} m in total",
                        run.cycles.len(),
                        run.total_distance
                    );
                    return Ok(SimulationReport {
                        origin: run.origin,
                        cycles: run.cycles,
                        return_home,
                        total_distance: run.total_distance,
                    });
                }
                State::Loading | State::Delivering { .. } | State::ReturningHome => {
                    run = run.step()?;
                }
            }
        }
    }

    #[expect(clippy::float_arithmetic, reason = "accumulates the pickup distance")]
    fn load_batch(&mut self) -> Result<State, PlanError> {
        let index = self.cycles.len().saturating_add(1);
        let Packing {
            scheduled,
            remaining,
            ..
        } = self
            .simulation
            .config
            .packer()
            .pack(std::mem::take(&mut self.pending));
        if scheduled.is_empty() && !remaining.is_empty() {
            return Err(PlanError::StalledPacking {
                pending: remaining.len(),
            });
        }
        self.pending = remaining;
        let scheduled_ids = scheduled.iter().map(|order| order.id).collect();

        let outcome = pickup(
            self.position,
            scheduled,
            std::mem::take(&mut self.restaurants),
            self.simulation.config.allow_repeat_visits,
            &self.simulation.metric,
        )?;
        self.restaurants = outcome.restaurants;
        self.position = outcome.position;
        self.total_distance += outcome.distance;

        log::info!(
            "cycle {index}: collected {} orders ({} of {} mass units) over {:.2} m, {} still pending",
            outcome.bag.len(),
            outcome.mass,
            self.simulation.config.capacity,
            outcome.distance,
            self.pending.len()
        );

        let cycle = CycleDraft {
            index,
            scheduled: scheduled_ids,
            bag_mass: outcome.mass,
            visits: outcome.visits,
            pickup: LabelledRoute::new(
                format!("Pickup {index}"),
                RouteColour::Blue,
                outcome.route,
                outcome.distance,
            ),
        };
        Ok(State::Delivering {
            bag: outcome.bag,
            cycle,
        })
    }

    #[expect(clippy::float_arithmetic, reason = "accumulates the delivery distance")]
    fn deliver_batch(&mut self, bag: Vec<Order>, cycle: CycleDraft) -> Result<State, PlanError> {
        let outcome = deliver(self.position, bag, &self.simulation.metric)?;
        self.position = outcome.position;
        self.total_distance += outcome.distance;

        log::info!(
            "cycle {}: delivered {} orders over {:.2} m",
            cycle.index,
            outcome.delivered.len(),
            outcome.distance
        );

        let delivery = LabelledRoute::new(
            format!("Delivery {}", cycle.index),
            RouteColour::Red,
            outcome.route,
            outcome.distance,
        );
        self.cycles.push(CycleReport {
            index: cycle.index,
            scheduled: cycle.scheduled,
            bag_mass: cycle.bag_mass,
            visits: cycle.visits,
            pickup: cycle.pickup,
            delivery,
        });

        Ok(if self.pending.is_empty() {
            State::ReturningHome
        } else {
            State::Loading
        })
    }

    #[expect(clippy::float_arithmetic, reason = "accumulates the final leg")]
    fn head_home(&mut self) -> State {
        let distance = self.simulation.metric.distance(self.position, self.origin);
        let route = Route::new(vec![self.position, self.origin]);
        self.total_distance += distance;
        self.position = self.origin;
        log::info!("returning to origin, {distance:.2} m away");
        State::Done {
            return_home: LabelledRoute::new("Return to origin", RouteColour::Green, route, distance),
        }
    }
}
