use crate::model::AvailabilityRange;

/// Collapse a chronological day series into the minimal list of maximal
/// contiguous ranges sharing one availability count, dropping every range
/// whose count is zero or negative.
///
/// Gaps in the output are meaningful: those days had nothing to sell.
pub fn collapse(series: impl IntoIterator<Item = AvailabilityRange>) -> Vec<AvailabilityRange> {
    let mut collapsed = Vec::new();
    let mut open: Option<AvailabilityRange> = None;

    for sample in series {
        match &mut open {
            Some(range) if range.count == sample.count => range.to = sample.to,
            Some(range) => {
                if range.count > 0 {
                    collapsed.push(*range);
                }
                *range = sample;
            }
            None => open = Some(sample),
        }
    }

    if let Some(range) = open
        && range.count > 0
    {
        collapsed.push(range);
    }

    collapsed
}
