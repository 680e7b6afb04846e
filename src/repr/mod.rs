use crate::{ops::*, *};

mod directed;
mod neighborhood;
mod undirected;
mod weighted;

pub use directed::*;
pub use neighborhood::*;
pub use undirected::*;
pub use weighted::*;
