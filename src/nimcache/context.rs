/// Parser input: the part of a path segment that has not been consumed yet.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Context<'a> {
    pub data: &'a str,
}

impl<'a> Context<'a> {
    pub const fn new(data: &'a str) -> Self {
        Self { data }
    }

    /// Consumes the longest prefix whose characters all satisfy `predicate`.
    pub fn take_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> &'a str {
        let index = self.data.find(|c| !predicate(c)).unwrap_or(self.data.len());
        let (prefix, rest) = self.data.split_at(index);

        self.data = rest;

        prefix
    }

    /// Consumes `c` if the remaining input starts with it.
    pub fn eat(&mut self, c: char) -> bool {
        match self.data.strip_prefix(c) {
            Some(rest) => {
                self.data = rest;

                true
            }
            None => false,
        }
    }
}
