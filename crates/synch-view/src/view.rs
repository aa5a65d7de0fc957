//! Multi-panel synchronized view
//!
//! Owns N panels, partitions them into the tied group and the independent
//! ones, and is the single entry point for visible-range-change events.
//! For a tied panel the event's numeric range is broadcast verbatim to
//! every group member, each of which re-downsamples its own signals for
//! that range; the broadcast completes before the event returns.

use synch_core::DownsampleBudget;

use crate::config::ViewConfig;
use crate::error::{ViewError, ViewResult};
use crate::label::LabelFormatter;
use crate::panel::{LineData, PanelSpec, ViewRange};
use crate::viewport::ViewportController;

#[derive(Debug)]
struct PanelState {
    controller: ViewportController,
    formatter: LabelFormatter,
    tied: bool,
}

/// One tick mark on a panel's x axis
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Snapshot of one panel, ready for the drawing surface
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPanel {
    pub lines: Vec<LineData>,
    pub range: ViewRange,
    pub ticks: Vec<Tick>,
}

/// Snapshot of the whole view, handed to the excluded rendering surface
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub panels: Vec<RenderedPanel>,
}

/// N panels of downsampled signals with tied/independent x ranges
#[derive(Debug)]
pub struct MultiPanelSynchronizedView {
    panels: Vec<PanelState>,
    tied_ids: Vec<usize>,
    config: ViewConfig,
    broadcasting: bool,
}

impl MultiPanelSynchronizedView {
    /// Build the view: validate specs, wire controllers, set initial ranges
    ///
    /// Untied panels start at the union x domain of their own signals; every
    /// tied panel starts at the union across ALL tied panels' signals, so no
    /// signal's extremities are hidden on first draw. Panels without a
    /// custom formatter get raw-index or timestamp labels built from the
    /// config's `num_decimals`.
    pub fn new(specs: Vec<PanelSpec>, config: ViewConfig) -> ViewResult<Self> {
        config.validate()?;
        if specs.is_empty() {
            return Err(ViewError::EmptyView);
        }
        for (panel, spec) in specs.iter().enumerate() {
            if spec.signals.is_empty() {
                return Err(ViewError::EmptyPanel { panel });
            }
        }
        let budget = DownsampleBudget::new(config.max_points)?;

        let tied_ids: Vec<usize> = specs
            .iter()
            .enumerate()
            .filter(|(_, s)| s.tied)
            .map(|(i, _)| i)
            .collect();
        // domain() is Some for every spec: empty panels were rejected above
        let tied_domain = tied_ids
            .iter()
            .filter_map(|&i| specs[i].domain())
            .reduce(|(lo_a, hi_a), (lo_b, hi_b)| (lo_a.min(lo_b), hi_a.max(hi_b)));

        let mut panels = Vec::with_capacity(specs.len());
        for spec in specs {
            let (lo, hi) = if spec.tied {
                tied_domain.unwrap_or((0.0, 0.0))
            } else {
                spec.domain().unwrap_or((0.0, 0.0))
            };
            let initial = ViewRange::new(lo, hi)?;
            let controller = ViewportController::new(&spec.signals, budget, initial)?;
            let formatter = match spec.formatter {
                Some(formatter) => formatter,
                None => match spec.samplerate {
                    Some(sr) => LabelFormatter::timestamp(sr, config.num_decimals)?,
                    None => LabelFormatter::Identity,
                },
            };
            panels.push(PanelState {
                controller,
                formatter,
                tied: spec.tied,
            });
        }
        log::debug!(
            "MultiPanelSynchronizedView: {} panels, tied group {:?}",
            panels.len(),
            tied_ids
        );
        Ok(Self {
            panels,
            tied_ids,
            config,
            broadcasting: false,
        })
    }

    /// Number of panels
    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Panel ids forming the tied group, in original order
    pub fn tied_ids(&self) -> &[usize] {
        &self.tied_ids
    }

    /// A panel's current visible range
    pub fn panel_range(&self, panel: usize) -> ViewResult<ViewRange> {
        self.panel(panel).map(|p| p.controller.range())
    }

    /// The single event entry point: panel `panel`'s visible range changed
    ///
    /// Synchronous and run to completion: for a tied panel the identical
    /// numeric range is applied to every group member before this returns;
    /// an untied panel updates alone. Broadcasts go through the direct
    /// state path, so propagation cannot re-enter here; a nested call (a
    /// surface repeating the event mid-broadcast) is dropped with a warning
    /// instead of recursing.
    pub fn on_view_range_changed(&mut self, panel: usize, range: ViewRange) -> ViewResult<()> {
        if self.broadcasting {
            log::warn!(
                "on_view_range_changed: dropping re-entrant event for panel {} during broadcast",
                panel
            );
            return Ok(());
        }
        let tied = self.panel(panel)?.tied;
        if !tied {
            return self
                .panel_mut(panel)?
                .controller
                .set_range(range)
                .map_err(ViewError::from);
        }

        self.broadcasting = true;
        let mut result = Ok(());
        for &id in &self.tied_ids {
            if let Err(e) = self.panels[id].controller.set_range(range) {
                result = Err(ViewError::from(e));
                break;
            }
        }
        self.broadcasting = false;
        result
    }

    /// Assemble the rendered snapshot: per panel, the decimated lines, the
    /// numeric range and `num_xticks` evenly spaced labelled ticks
    pub fn render(&self) -> RenderedView {
        let panels = self
            .panels
            .iter()
            .map(|p| {
                let range = p.controller.range();
                RenderedPanel {
                    lines: p.controller.lines().to_vec(),
                    range,
                    ticks: self.ticks(range, &p.formatter),
                }
            })
            .collect();
        RenderedView { panels }
    }

    fn ticks(&self, range: ViewRange, formatter: &LabelFormatter) -> Vec<Tick> {
        let n = self.config.num_xticks;
        if n == 0 {
            return Vec::new();
        }
        if n == 1 || range.width() == 0.0 {
            return vec![Tick {
                position: range.start(),
                label: formatter.format(range.start()),
            }];
        }
        (0..n)
            .map(|i| {
                let position = range.start() + range.width() * i as f64 / (n - 1) as f64;
                Tick {
                    position,
                    label: formatter.format(position),
                }
            })
            .collect()
    }

    fn panel(&self, panel: usize) -> ViewResult<&PanelState> {
        self.panels.get(panel).ok_or(ViewError::UnknownPanel {
            panel,
            panels: self.panels.len(),
        })
    }

    fn panel_mut(&mut self, panel: usize) -> ViewResult<&mut PanelState> {
        let panels = self.panels.len();
        self.panels
            .get_mut(panel)
            .ok_or(ViewError::UnknownPanel { panel, panels })
    }
}
