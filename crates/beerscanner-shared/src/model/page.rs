/// Which page to request. Sent as query parameters, `sort` as a single comma
/// separated value (e.g. `sort=name,asc`)
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Pageable {
    pub page: u32,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
}

impl Pageable {
    pub const DEFAULT_SIZE: u32 = 20;

    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    pub fn sorted_by<S: Into<String>>(mut self, field: S) -> Self {
        self.sort.push(field.into());
        self
    }
}

impl Default for Pageable {
    fn default() -> Self {
        Self::first()
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortObject {
    #[serde(default)]
    pub empty: bool,
    #[serde(default)]
    pub sorted: bool,
    #[serde(default)]
    pub unsorted: bool,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageableObject {
    #[serde(default)]
    pub offset: u64,
    #[serde(default)]
    pub sort: SortObject,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub paged: bool,
    #[serde(default)]
    pub unpaged: bool,
}

/// One page of a listing as returned by the server
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub number_of_elements: u32,
    #[serde(default)]
    pub sort: SortObject,
    #[serde(default)]
    pub pageable: PageableObject,
    #[serde(default)]
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        !self.last && self.number + 1 < self.total_pages
    }
}
