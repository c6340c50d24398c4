pub trait Index {
    fn insert(&mut self, word: &str) -> bool;
    fn contains(&self, word: &str) -> bool;

    /// Inserts every item, returning how many were accepted.
    fn insert_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item = &'a str> {
        items.into_iter().filter(|x| self.insert(x)).count()
    }
}
