//! Emission plan for a downstream geometry emitter
//!
//! Turns sections into plain data a host can build curves from: one
//! raised arc per stitch segment, a per-section vertical lift so later
//! sections sit on top of earlier ones, and the thread color. No meshing
//! happens here.

use super::color_ramp::ColorRamp;
use crate::stitch::Section;
use glam::DVec3;
use serde::{Deserialize, Serialize};
use stitchkit_core::constants::{DEFAULT_SECTION_LIFT, DEFAULT_THREAD_THICKNESS, DEFAULT_Z_HEIGHT};
use stitchkit_core::{Point2, Rgb};
use tracing::debug;

/// Geometry parameters forwarded to the emitter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanSettings {
    /// Curve bevel radius
    pub thread_thickness: f64,
    /// Height of the raised middle of each stitch arc
    pub z_height: f64,
    /// Vertical offset added per section index
    pub section_lift: f64,
    /// Whether the host should create the thread material
    pub create_material: bool,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            thread_thickness: DEFAULT_THREAD_THICKNESS,
            z_height: DEFAULT_Z_HEIGHT,
            section_lift: DEFAULT_SECTION_LIFT,
            create_material: true,
        }
    }
}

/// One visible stitch between two consecutive section points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StitchArc {
    pub from: Point2,
    pub to: Point2,
}

impl StitchArc {
    /// Five-point raised profile: down at both ends, `z_height` in between
    pub fn control_points(&self, z_height: f64) -> [DVec3; 5] {
        let mid = self.from.midpoint(&self.to);
        [
            DVec3::new(self.from.x, self.from.y, 0.0),
            DVec3::new(self.from.x, self.from.y, z_height),
            DVec3::new(mid.x, mid.y, z_height),
            DVec3::new(self.to.x, self.to.y, z_height),
            DVec3::new(self.to.x, self.to.y, 0.0),
        ]
    }

    pub fn length(&self) -> f64 {
        self.from.distance_to(&self.to)
    }
}

/// Emission data for a single section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPlan {
    /// Position of the section in emission order
    pub index: usize,
    /// Thread index, stored on the emitted object for shading
    pub thread_number: usize,
    /// Ramp key the shader derives from `thread_number`
    pub shading_key: Option<f64>,
    pub color: Option<Rgb>,
    /// Vertical offset of the whole section
    pub lift: f64,
    pub is_jump_only: bool,
    pub arcs: Vec<StitchArc>,
}

impl SectionPlan {
    /// Sections with fewer than two points produce no arcs
    pub fn is_visible(&self) -> bool {
        !self.arcs.is_empty()
    }
}

/// Emission data for a whole document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionPlan {
    pub settings: PlanSettings,
    pub sections: Vec<SectionPlan>,
}

impl EmissionPlan {
    /// Plan every section in order; `ramp` is `None` for unshaded imports
    pub fn build(sections: &[Section], ramp: Option<&ColorRamp>, settings: PlanSettings) -> Self {
        let plans: Vec<SectionPlan> = sections
            .iter()
            .enumerate()
            .map(|(index, section)| SectionPlan {
                index,
                thread_number: section.thread_index,
                shading_key: ramp.map(|ramp| ramp.shading_key(section.thread_index)),
                color: ramp.map(|ramp| ramp.lookup(section.thread_index)),
                lift: settings.section_lift * index as f64,
                is_jump_only: section.is_jump_only,
                arcs: section
                    .segments()
                    .map(|(from, to)| StitchArc { from, to })
                    .collect(),
            })
            .collect();

        let plan = Self {
            settings,
            sections: plans,
        };
        debug!(
            "Emission plan: {} sections, {} visible, {} arcs",
            plan.sections.len(),
            plan.visible_sections().count(),
            plan.arc_count()
        );
        plan
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = &SectionPlan> {
        self.sections.iter().filter(|plan| plan.is_visible())
    }

    /// A material is only useful when there is a ramp to drive it
    pub fn needs_material(&self) -> bool {
        self.settings.create_material && self.sections.iter().any(|plan| plan.color.is_some())
    }

    pub fn arc_count(&self) -> usize {
        self.sections.iter().map(|plan| plan.arcs.len()).sum()
    }

    /// Combined length of every stitch arc, in normalized units
    pub fn thread_length(&self) -> f64 {
        self.sections
            .iter()
            .flat_map(|plan| plan.arcs.iter())
            .map(StitchArc::length)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stitchkit_core::ThreadPalette;

    fn section(thread_index: usize, points: &[(f64, f64)]) -> Section {
        Section {
            thread_index,
            points: points.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
            is_jump_only: false,
        }
    }

    #[test]
    fn test_control_points_profile() {
        let arc = StitchArc {
            from: Point2::new(0.0, 0.0),
            to: Point2::new(2.0, 4.0),
        };
        let cps = arc.control_points(0.5);
        assert_eq!(cps[0], DVec3::new(0.0, 0.0, 0.0));
        assert_eq!(cps[1], DVec3::new(0.0, 0.0, 0.5));
        assert_eq!(cps[2], DVec3::new(1.0, 2.0, 0.5));
        assert_eq!(cps[3], DVec3::new(2.0, 4.0, 0.5));
        assert_eq!(cps[4], DVec3::new(2.0, 4.0, 0.0));
    }

    #[test]
    fn test_short_sections_produce_no_arcs() {
        let sections = vec![
            section(0, &[]),
            section(0, &[(1.0, 1.0)]),
            section(0, &[(0.0, 0.0), (3.0, 4.0), (3.0, 0.0)]),
        ];
        let plan = EmissionPlan::build(&sections, None, PlanSettings::default());

        assert_eq!(plan.sections.len(), 3);
        assert!(!plan.sections[0].is_visible());
        assert!(!plan.sections[1].is_visible());
        assert_eq!(plan.sections[2].arcs.len(), 2);
        assert_eq!(plan.visible_sections().count(), 1);
        assert!((plan.thread_length() - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_lift_grows_with_section_index() {
        let sections = vec![section(0, &[]), section(0, &[]), section(1, &[])];
        let settings = PlanSettings {
            section_lift: 0.5,
            ..PlanSettings::default()
        };
        let plan = EmissionPlan::build(&sections, None, settings);
        let lifts: Vec<f64> = plan.sections.iter().map(|p| p.lift).collect();
        assert_eq!(lifts, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_sections_are_shaded_by_thread() {
        let palette = ThreadPalette::new(vec![Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0)]);
        let ramp = ColorRamp::new(&palette).unwrap();
        let sections = vec![section(0, &[]), section(1, &[])];

        let plan = EmissionPlan::build(&sections, Some(&ramp), PlanSettings::default());
        assert_eq!(plan.sections[0].color, Some(Rgb::new(1.0, 0.0, 0.0)));
        assert_eq!(plan.sections[1].color, Some(Rgb::new(0.0, 0.0, 1.0)));
        assert_eq!(plan.sections[1].shading_key, Some(0.5));

        let unshaded = EmissionPlan::build(&sections, None, PlanSettings::default());
        assert!(unshaded.sections.iter().all(|p| p.color.is_none()));
    }

    #[test]
    fn test_material_request() {
        let palette = ThreadPalette::new(vec![Rgb::new(1.0, 0.0, 0.0)]);
        let ramp = ColorRamp::new(&palette).unwrap();
        let sections = vec![section(0, &[(0.0, 0.0), (1.0, 0.0)])];

        let shaded = EmissionPlan::build(&sections, Some(&ramp), PlanSettings::default());
        assert!(shaded.needs_material());

        let unshaded = EmissionPlan::build(&sections, None, PlanSettings::default());
        assert!(!unshaded.needs_material());

        let settings = PlanSettings {
            create_material: false,
            ..PlanSettings::default()
        };
        let opted_out = EmissionPlan::build(&sections, Some(&ramp), settings);
        assert!(!opted_out.needs_material());
    }
}
