use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
  Home,
  Browse,
  Search,
  MyReviews,
  About,
  Login,
  Movie(String),
  AddReview(String),
  UpdateReview(String),
  Reviews(String),
}

impl Route {
  pub fn path(&self) -> String {
    match self {
      Route::Home => "/".to_owned(),
      Route::Browse => "/browse".to_owned(),
      Route::Search => "/search".to_owned(),
      Route::MyReviews => "/my-reviews".to_owned(),
      Route::About => "/about".to_owned(),
      Route::Login => "/login".to_owned(),
      Route::Movie(id) => format!("/movie/{}", id),
      Route::AddReview(id) => format!("/add-review/{}", id),
      Route::UpdateReview(id) => format!("/update-review/{}", id),
      Route::Reviews(id) => format!("/reviews/{}", id),
    }
  }

  pub fn parse(path: &str) -> Option<Route> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    let route = match segments.as_slice() {
      [""] => Route::Home,
      ["browse"] => Route::Browse,
      ["search"] => Route::Search,
      ["my-reviews"] => Route::MyReviews,
      ["about"] => Route::About,
      ["login"] => Route::Login,
      ["movie", id] if !id.is_empty() => Route::Movie(id.to_string()),
      ["add-review", id] if !id.is_empty() => Route::AddReview(id.to_string()),
      ["update-review", id] if !id.is_empty() => Route::UpdateReview(id.to_string()),
      ["reviews", id] if !id.is_empty() => Route::Reviews(id.to_string()),
      _ => return None,
    };

    Some(route)
  }
}

impl fmt::Display for Route {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.path())
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
  pub route: Route,
  pub label: &'static str,
  pub icon: &'static str,
  pub active: bool,
}

pub struct Sidebar {
  pub title: &'static str,
  pub items: Vec<NavItem>,
  pub login: Route,
}

impl Sidebar {
  /// Items are marked active only on an exact path match.
  pub fn new(current_path: &str) -> Self {
    let items = vec![
      (Route::Home, "Home", "🏠"),
      (Route::Browse, "Browse Movies", "🎬"),
      (Route::Search, "Search", "🔍"),
      (Route::MyReviews, "My Reviews", "⭐"),
      (Route::About, "About", "ℹ️"),
    ]
    .into_iter()
    .map(|(route, label, icon)| NavItem {
      active: route.path() == current_path,
      route,
      label,
      icon,
    })
    .collect();

    Sidebar {
      title: "Movie Reviews",
      items,
      login: Route::Login,
    }
  }

  pub fn active(&self) -> Option<&NavItem> {
    self.items.iter().find(|item| item.active)
  }
}
