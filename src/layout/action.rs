use super::ObjectLayout;

/// What input a shape still accepts, given its current layout.
///
/// `finishable` marks that the shape is already valid even though it would
/// take more points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
    Push { finishable: bool },
    PushSection { finishable: bool },
    ContinuousPush { finishable: bool },
    ContinuousPushThenFinish,
    Finish,
}

impl LayoutAction {
    pub fn is_finishable(&self) -> bool {
        match *self {
            Self::Push { finishable }
            | Self::PushSection { finishable }
            | Self::ContinuousPush { finishable } => finishable,
            Self::ContinuousPushThenFinish | Self::Finish => true,
        }
    }

    /// True when the action accepts a point appended to the current section.
    pub fn allows_push(&self) -> bool {
        matches!(
            self,
            Self::Push { .. } | Self::ContinuousPush { .. } | Self::ContinuousPushThenFinish
        )
    }

    /// True when the action accepts a point that opens a new section.
    pub fn allows_push_section(&self) -> bool {
        matches!(self, Self::PushSection { .. } | Self::ContinuousPush { .. })
    }

    /// One section of exactly `items` points.
    ///
    /// # Panics
    /// When `items` is zero.
    pub fn single_section(items: usize, layout: &ObjectLayout) -> Self {
        assert!(items > 0, "`items` must be greater than 0");

        match layout.first() {
            Some(section) if section.len() == items => Self::Finish,
            _ => Self::Push { finishable: false },
        }
    }

    /// One open-ended section, finishable as soon as it holds a point.
    pub fn single_continuous_section(layout: &ObjectLayout) -> Self {
        if layout.is_empty() {
            Self::Push { finishable: false }
        } else {
            Self::ContinuousPushThenFinish
        }
    }

    /// Sections with the declared sizes, filled in order.
    ///
    /// # Panics
    /// When `sizes` is empty or holds a zero.
    pub fn multiple_sections(sizes: &[usize], layout: &ObjectLayout) -> Self {
        assert!(!sizes.is_empty(), "`sizes` must not be empty");
        assert!(
            sizes.iter().all(|&n| n > 0),
            "every section size must be greater than 0"
        );

        let current = layout.section_sizes();
        if current == sizes {
            return Self::Finish;
        }

        let last_is_full = layout
            .last()
            .zip(sizes.get(layout.len().wrapping_sub(1)))
            .is_some_and(|(section, &size)| section.len() == size);

        if layout.is_empty() || last_is_full {
            Self::PushSection { finishable: false }
        } else {
            Self::Push { finishable: false }
        }
    }
}
