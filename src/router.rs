//! Declarative route table for the dashboard single-page app, consumed once
//! at bootstrap by an external history-based router. Navigation state beyond
//! the path rides in query strings (`/event?event=big-dog-backyard_2023`),
//! so no route carries path parameters.

/// How the router writes browser history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    /// HTML5 pushState URLs (`/athletes`)
    PushState,
    /// Fragment URLs (`/#/athletes`)
    Hash,
}

/// View component a route resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewComponent {
    Home,
    EventGrid,
    EventGraph,
    AthletesGrid,
}

/// One route table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewComponent,
}

/// Route table plus the history mode it expects
#[derive(Debug, Clone)]
pub struct RouterConfig {
    pub history: HistoryMode,
    pub routes: Vec<RouteEntry>,
}

const ROUTES: [RouteEntry; 4] = [
    RouteEntry {
        path: "/",
        name: "Home",
        view: ViewComponent::Home,
    },
    RouteEntry {
        path: "/event",
        name: "EventGrid",
        view: ViewComponent::EventGrid,
    },
    RouteEntry {
        path: "/event/graph",
        name: "EventGraph",
        view: ViewComponent::EventGraph,
    },
    RouteEntry {
        path: "/athletes",
        name: "AthletesGrid",
        view: ViewComponent::AthletesGrid,
    },
];

pub fn route_table() -> Vec<RouteEntry> {
    ROUTES.to_vec()
}

pub fn router_config() -> RouterConfig {
    RouterConfig {
        history: HistoryMode::PushState,
        routes: route_table(),
    }
}

/// Look up a route by its stable name, e.g. for deep-link construction
pub fn find_by_name(name: &str) -> Option<RouteEntry> {
    ROUTES.iter().copied().find(|route| route.name == name)
}
