/// A checkpoint of the solver reported to listeners.
///
/// Level-1 steps mark the end of a whole phase. Level-2 steps are the finer
/// sub-steps nested inside the level-1 step documented on each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SolverStep {
    /// Level 1: every column, then every row, has been reduced by its minimum.
    #[display("subtract minimum")]
    SubtractMin,
    /// Level 2 of [`SubtractMin`](Self::SubtractMin): column pass done.
    #[display("subtract column minimum")]
    SubtractColMin,
    /// Level 2 of [`SubtractMin`](Self::SubtractMin): row pass done.
    #[display("subtract row minimum")]
    SubtractRowMin,

    /// Level 1: no zero is left to frame.
    #[display("mark zeroes")]
    MarkZeroes,
    /// Level 2 of [`MarkZeroes`](Self::MarkZeroes): one zero was framed.
    #[display("frame zero")]
    FrameZero,
    /// Level 2 of [`MarkZeroes`](Self::MarkZeroes): the zeroes sharing a line
    /// with the last framed zero were struck out.
    #[display("strike out zeroes")]
    StrikeOutZeroes,

    /// Level 1: the line cover is complete.
    #[display("mark lines")]
    MarkLines,
    /// Level 2 of [`MarkLines`](Self::MarkLines): one row was marked.
    ///
    /// Marks are provisional until `MarkLines` follows. When marking reaches
    /// a column without a framed zero, the marks are dropped, the framed
    /// zeroes are regrown along the marked path (one
    /// [`FrameZero`](Self::FrameZero) per reframed cell) and marking starts
    /// over.
    #[display("mark row")]
    MarkRow,
    /// Level 2 of [`MarkLines`](Self::MarkLines): one column was marked.
    /// Provisional, as for [`MarkRow`](Self::MarkRow).
    #[display("mark column")]
    MarkCol,

    /// Level 1: the matrix was adjusted by the minimum uncovered value.
    #[display("adjust by minimum")]
    AdjustByMin,
    /// Level 2 of [`AdjustByMin`](Self::AdjustByMin): minimum found.
    #[display("find minimum")]
    FindMin,
    /// Level 2 of [`AdjustByMin`](Self::AdjustByMin): minimum added and
    /// subtracted.
    #[display("apply minimum")]
    ApplyMin,
}

impl SolverStep {
    pub const ALL: [Self; 12] = [
        Self::SubtractMin,
        Self::SubtractColMin,
        Self::SubtractRowMin,
        Self::MarkZeroes,
        Self::FrameZero,
        Self::StrikeOutZeroes,
        Self::MarkLines,
        Self::MarkRow,
        Self::MarkCol,
        Self::AdjustByMin,
        Self::FindMin,
        Self::ApplyMin,
    ];

    /// `1` for phase boundaries, `2` for sub-steps.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::SubtractMin | Self::MarkZeroes | Self::MarkLines | Self::AdjustByMin => 1,
            Self::SubtractColMin
            | Self::SubtractRowMin
            | Self::FrameZero
            | Self::StrikeOutZeroes
            | Self::MarkRow
            | Self::MarkCol
            | Self::FindMin
            | Self::ApplyMin => 2,
        }
    }
}
