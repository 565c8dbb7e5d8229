/// One line of a chart; `None` marks a point with no data.
#[derive(Debug, Clone)]
pub struct ChartSeries {
    pub name: String,
    pub class: &'static str,
    pub points: Vec<Option<f64>>,
}
