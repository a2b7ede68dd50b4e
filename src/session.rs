use std::fmt;

use serde_json::Value as JsonValue;

use crate::config::Config;
use crate::data::model::Curve;
use crate::data::range::RangeSpec;
use crate::data::table::Table;
use crate::data::transform::square_curve;
use crate::data::{Error, Result};
use crate::helper::ListHelper;

// ---------------------------------------------------------------------------
// Cells – the steps of one run, in execution order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cell {
    /// Sample the range and square it.
    Computation,
    /// Prepare the curve for the plot window.
    Visualization,
    /// Assemble the `x`/`y` table.
    Table,
    /// Call the external `ext_list` helper.
    Helper,
}

impl Cell {
    pub fn title(&self) -> &'static str {
        match self {
            Cell::Computation => "Computation",
            Cell::Visualization => "Visualization",
            Cell::Table => "Table",
            Cell::Helper => "Helper",
        }
    }

    /// Cells enabled by `config`, top to bottom.
    pub fn plan(config: &Config) -> Vec<Cell> {
        let mut cells = vec![Cell::Computation, Cell::Visualization];
        if config.table.enabled {
            cells.push(Cell::Table);
        }
        if config.helper.enabled {
            cells.push(Cell::Helper);
        }
        cells
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of the last helper call. Errors are kept as their message.
#[derive(Debug, Clone, PartialEq)]
pub enum HelperOutcome {
    Returned(JsonValue),
    Failed(String),
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything one run computes, independent of rendering.
pub struct Session {
    pub config: Config,

    /// Range currently shown; starts as `config.range`, edited from the UI.
    pub range: RangeSpec,

    /// Sample and transformed sequences (None until computed).
    pub curve: Option<Curve>,

    /// Table view of `curve` (None unless the table cell ran).
    pub table: Option<Table>,

    /// Output of the last helper call.
    pub helper_outcome: Option<HelperOutcome>,

    /// Whether the table panel is shown in the window.
    pub show_table: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Cells that have finished, in the order they ran.
    pub executed: Vec<Cell>,

    helper: Box<dyn ListHelper>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        let helper = config.helper.build();
        Self::with_helper(config, helper)
    }

    pub fn with_helper(config: Config, helper: Box<dyn ListHelper>) -> Self {
        Self {
            range: config.range,
            show_table: config.table.enabled,
            config,
            curve: None,
            table: None,
            helper_outcome: None,
            status_message: None,
            executed: Vec::new(),
            helper,
        }
    }

    pub fn helper_name(&self) -> String {
        self.helper.name()
    }

    /// Run `cells` in order, each exactly once.
    ///
    /// Computation and table failures stop the run; a helper failure is
    /// recorded in `helper_outcome` and the run continues.
    pub fn run(&mut self, cells: &[Cell]) -> Result<()> {
        for &cell in cells {
            log::info!("Running cell: {cell}");
            self.run_cell(cell)?;
            self.executed.push(cell);
        }
        Ok(())
    }

    fn run_cell(&mut self, cell: Cell) -> Result<()> {
        match cell {
            Cell::Computation => self.compute(),
            Cell::Visualization => {
                let curve = self.curve.as_ref().ok_or(Error::MissingCurve)?;
                log::info!(
                    "Plot ready: {} points, '{}'",
                    curve.len(),
                    self.config.plot.title
                );
                Ok(())
            }
            Cell::Table => {
                self.build_table()?;
                self.show_table = true;
                Ok(())
            }
            Cell::Helper => {
                self.invoke_helper();
                Ok(())
            }
        }
    }

    /// Sample `self.range` and square it. Rebuilds an existing table.
    pub fn compute(&mut self) -> Result<()> {
        let samples = self.range.generate()?;
        let curve = square_curve(samples);
        log::debug!(
            "Computed {} samples over [{}, {}]",
            curve.len(),
            self.range.lower,
            self.range.upper
        );
        self.curve = Some(curve);
        if self.table.is_some() {
            self.build_table()?;
        }
        Ok(())
    }

    pub fn build_table(&mut self) -> Result<&Table> {
        let curve = self.curve.as_ref().ok_or(Error::MissingCurve)?;
        let table = Table::with_labels(curve, self.config.table.labels.clone())?;
        log::debug!("Built table with {} rows", table.num_rows());
        Ok(&*self.table.insert(table))
    }

    /// Call `ext_list` with the configured arguments.
    pub fn invoke_helper(&mut self) -> &HelperOutcome {
        let call = self.config.helper.call();
        let outcome = match self.helper.call(&call) {
            Ok(value) => {
                log::info!("ext_list{:?} returned {value}", (&call.list, call.a, call.b));
                HelperOutcome::Returned(value)
            }
            Err(e) => {
                log::error!("ext_list failed: {e}");
                HelperOutcome::Failed(e.to_string())
            }
        };
        &*self.helper_outcome.insert(outcome)
    }

    /// Apply a new range from the UI and recompute.
    pub fn set_range(&mut self, range: RangeSpec) {
        self.range = range;
        match self.compute() {
            Ok(()) => self.status_message = None,
            Err(e) => {
                log::warn!("Range rejected: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::{HelperCall, HelperError, UnboundHelper};

    struct SumHelper;

    impl ListHelper for SumHelper {
        fn name(&self) -> String {
            "sum".to_string()
        }

        fn call(&self, call: &HelperCall) -> std::result::Result<JsonValue, HelperError> {
            Ok(serde_json::json!(call.list.iter().sum::<i64>() + call.a + call.b))
        }
    }

    #[test]
    fn default_plan_is_compute_then_plot() {
        assert_eq!(
            Cell::plan(&Config::default()),
            vec![Cell::Computation, Cell::Visualization]
        );
    }

    #[test]
    fn full_plan_runs_every_cell_in_order() {
        let mut config = Config::default();
        config.table.enabled = true;
        config.helper.enabled = true;
        let cells = Cell::plan(&config);

        let mut session = Session::with_helper(config, Box::new(SumHelper));
        session.run(&cells).unwrap();

        assert_eq!(session.executed, cells);
        assert_eq!(session.table.as_ref().unwrap().num_rows(), 100);
        assert_eq!(
            session.helper_outcome,
            Some(HelperOutcome::Returned(serde_json::json!(36)))
        );
    }

    #[test]
    fn helper_failure_does_not_abort_the_run() {
        let cells = [Cell::Computation, Cell::Helper, Cell::Table];
        let mut session = Session::with_helper(Config::default(), Box::new(UnboundHelper));
        session.run(&cells).unwrap();

        assert_eq!(session.executed, cells);
        assert!(matches!(session.helper_outcome, Some(HelperOutcome::Failed(_))));
        assert!(session.table.is_some());
    }

    #[test]
    fn table_before_computation_fails() {
        let mut session = Session::new(Config::default());
        let err = session.run(&[Cell::Table]).unwrap_err();
        assert!(matches!(err, Error::MissingCurve));
        assert!(session.executed.is_empty());
    }

    #[test]
    fn set_range_recomputes_curve_and_table() {
        let mut session = Session::new(Config::default());
        session.run(&[Cell::Computation, Cell::Table]).unwrap();

        session.set_range(RangeSpec::new(0.0, 1.0, 11));
        assert_eq!(session.curve.as_ref().unwrap().len(), 11);
        assert_eq!(session.table.as_ref().unwrap().num_rows(), 11);
        assert!(session.status_message.is_none());
    }

    #[test]
    fn invalid_range_sets_status_and_keeps_old_curve() {
        let mut session = Session::new(Config::default());
        session.run(&[Cell::Computation]).unwrap();

        session.set_range(RangeSpec::new(1.0, -1.0, 10));
        assert!(session.status_message.as_deref().unwrap().starts_with("Error"));
        assert_eq!(session.curve.as_ref().unwrap().len(), 100);
    }
}
