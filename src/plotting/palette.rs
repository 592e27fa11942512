/// Cycles through a fixed list of colors, one per plotted element
///
/// Always holds at least one color.
#[derive(Debug, Clone)]
pub struct ColorSource<C> {
    colors: Vec<C>,
    index: usize,
}
impl<C: Clone> ColorSource<C> {
    /// Creates a new source yielding `first`, then each of `rest`
    #[must_use]
    pub fn new(first: C, rest: Vec<C>) -> Self {
        let mut colors = Vec::with_capacity(rest.len() + 1);
        colors.push(first);
        colors.extend(rest);
        Self { colors, index: 0 }
    }

    /// Returns the next color, wrapping around at the end of the list
    pub fn next_color(&mut self) -> C {
        let color = self.colors[self.index].clone();
        self.index = (self.index + 1) % self.colors.len();
        color
    }
}
