mod view;

pub use view::SearchResultsPage;
