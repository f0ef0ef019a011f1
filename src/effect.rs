//! Effects - repository calls requested by the reducers

#[derive(Clone, Debug, PartialEq)]
pub enum ListEffect {
    /// Fetch the page at `offset` and append it
    FetchPage { offset: u32, generation: u64 },
    /// Fetch the first page and replace the list with it
    RefreshPage,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DetailEffect {
    FetchDetail { id: u32 },
}
