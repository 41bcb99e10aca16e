use ndarray::Array1;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::archive::{FrontMember, ParetoArchive};
use crate::config::MoeadConfig;
use crate::decompose::tchebycheff;
use crate::error::MoeadError;
use crate::operators::{crossover, mutate};
use crate::population::{evaluate, Population};
use crate::weights::WeightPlan;
use crate::{ObjectiveFunction, RuntimeProcessor};

/// Lifecycle of a [`Moead`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Running,
    Terminated,
}

/// The MOEA/D driver.
///
/// Owns the configuration and, after a run, the best-found front. All
/// state of a run is private to one [`Moead::optimize`] call; the front is
/// replaced wholesale when the call terminates.
pub struct Moead {
    config: MoeadConfig,
    phase: Phase,
    best_front: Vec<FrontMember>,
}

impl Moead {
    pub fn new(config: MoeadConfig) -> Moead {
        Moead {
            config,
            phase: Phase::Uninitialized,
            best_front: Vec::new(),
        }
    }

    pub fn config(&self) -> &MoeadConfig {
        &self.config
    }

    /// Parameters may be adjusted between runs; they are re-validated at
    /// the start of the next [`Moead::optimize`] call.
    pub fn config_mut(&mut self) -> &mut MoeadConfig {
        &mut self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The best-found front. Empty before the first successful
    /// [`Moead::optimize`] call.
    pub fn front(&self) -> &[FrontMember] {
        &self.best_front
    }

    /// Runs the optimization: generates weights and neighbourhoods,
    /// samples and evaluates an initial population, then iterates the
    /// generation step `num_generations` times, folding every evaluated
    /// candidate into the front.
    ///
    /// `dimensions` fixes the decision-vector length; the bound vectors
    /// broadcast to it when given as a single entry. The processor hooks
    /// run synchronously and may stop the run between generations. The
    /// returned scalar is the minimum decomposed value over the final
    /// population, each subproblem scored against its own weight vector.
    pub fn optimize<R: Rng>(
        &mut self,
        objective_fns: &mut [Box<dyn ObjectiveFunction + '_>],
        dimensions: usize,
        processor: &mut dyn RuntimeProcessor,
        rng: &mut R,
    ) -> Result<f64, MoeadError> {
        self.config.validate(dimensions, objective_fns.len())?;
        let (lower, upper) = self.config.broadcast_bounds(dimensions)?;

        let neighbourhood_size = if self.config.neighbourhood_size > self.config.population_size {
            warn!(
                requested = self.config.neighbourhood_size,
                clamped = self.config.population_size,
                "neighbourhood size exceeds population size, clamping"
            );
            self.config.population_size
        } else {
            self.config.neighbourhood_size
        };

        info!(
            population_size = self.config.population_size,
            num_generations = self.config.num_generations,
            objectives = objective_fns.len(),
            dimensions,
            "starting MOEA/D run"
        );

        let plan = WeightPlan::generate(
            self.config.population_size,
            objective_fns.len(),
            neighbourhood_size,
            rng,
        );

        let mut population = Population::initialise(
            self.config.population_size,
            objective_fns,
            &lower.view(),
            &upper.view(),
            processor,
            rng,
        );
        self.phase = Phase::Initialized;

        let mut archive = ParetoArchive::new();
        for subproblem in 0..population.len() {
            archive.fold(
                population.decision(subproblem),
                population.objective(subproblem),
            );
        }
        processor.population_initialized(population.decisions(), population.objectives());

        self.phase = Phase::Running;
        for generation in 1..=self.config.num_generations {
            self.generation_step(
                &mut population,
                &plan,
                objective_fns,
                &lower,
                &upper,
                &mut archive,
                processor,
                rng,
            );

            debug!(
                generation,
                front_size = archive.len(),
                "generation finished"
            );
            processor.generation_finished(generation, population.ideal_point(), archive.members());

            if processor.needs_early_stop() {
                info!(generation, "early stop requested");
                break;
            }
        }

        let summary = (0..population.len())
            .map(|subproblem| {
                tchebycheff(
                    &plan.weight(subproblem).view(),
                    &population.ideal_point().view(),
                    &population.objective(subproblem).view(),
                )
            })
            .fold(f64::INFINITY, f64::min);

        self.best_front = archive.into_members();
        self.phase = Phase::Terminated;
        info!(
            front_size = self.best_front.len(),
            summary, "run terminated"
        );

        Ok(summary)
    }

    /// One pass over every subproblem in index order. Replacements become
    /// visible to later subproblems within the same pass; there is no
    /// snapshot of the population.
    #[allow(clippy::too_many_arguments)]
    fn generation_step<R: Rng>(
        &self,
        population: &mut Population,
        plan: &WeightPlan,
        objective_fns: &mut [Box<dyn ObjectiveFunction + '_>],
        lower: &Array1<f64>,
        upper: &Array1<f64>,
        archive: &mut ParetoArchive,
        processor: &mut dyn RuntimeProcessor,
        rng: &mut R,
    ) {
        for subproblem in 0..population.len() {
            let (first, second) = mating_pair(plan.neighbourhood(subproblem), population.len(), rng);

            let mut child = crossover(
                &population.decision(first).view(),
                &population.decision(second).view(),
                self.config.crossover_prob,
                rng,
            );
            mutate(
                &mut child,
                self.config.mutation_prob,
                self.config.mutation_strength,
                &lower.view(),
                &upper.view(),
                rng,
            );

            let child_objectives = evaluate(objective_fns, &child, processor);
            population.update_ideal(&child_objectives);

            for &neighbour in plan.neighbourhood(subproblem) {
                let weight = plan.weight(neighbour).view();
                let ideal = population.ideal_point().view();
                let child_value = tchebycheff(&weight, &ideal, &child_objectives.view());
                let incumbent_value =
                    tchebycheff(&weight, &ideal, &population.objective(neighbour).view());

                // Replacement on equality is intentional; it affects
                // convergence and seeded reproducibility.
                if child_value <= incumbent_value {
                    population.replace(neighbour, child.clone(), child_objectives.clone());
                }
            }

            archive.fold(&child, &child_objectives);
        }
    }
}

/// Two distinct parent indices drawn uniformly from the neighbourhood,
/// falling back to the whole population when the neighbourhood cannot
/// supply two members.
fn mating_pair<R: Rng>(neighbourhood: &[usize], population_len: usize, rng: &mut R) -> (usize, usize) {
    if neighbourhood.len() >= 2 {
        let first = rng.gen_range(0..neighbourhood.len());
        let mut second = rng.gen_range(0..neighbourhood.len());
        while second == first {
            second = rng.gen_range(0..neighbourhood.len());
        }
        return (neighbourhood[first], neighbourhood[second]);
    }

    if population_len < 2 {
        return (0, 0);
    }

    let first = rng.gen_range(0..population_len);
    let mut second = rng.gen_range(0..population_len);
    while second == first {
        second = rng.gen_range(0..population_len);
    }
    (first, second)
}
