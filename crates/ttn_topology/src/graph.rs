//! The qubit connectivity graph.

use std::collections::{HashMap, HashSet, VecDeque};

use ttn_core::{Result, TtnError};

/// An oriented view of an undirected edge, as seen from one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    /// The site at the other end of the edge.
    pub site: usize,
    /// The shared link id (same value from either endpoint's list).
    pub link: usize,
}

/// An undirected connectivity graph over a fixed number of sites.
#[derive(Debug, Clone)]
pub struct Topology {
    num_bits: usize,
    num_links: usize,
    neighbors: Vec<Vec<Neighbor>>,
}

impl Topology {
    /// Creates an empty topology with `num_bits` sites and no links.
    pub fn new(num_bits: usize) -> Self {
        Self {
            num_bits,
            num_links: 0,
            neighbors: vec![Vec::new(); num_bits],
        }
    }

    /// Number of sites.
    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    /// Number of links added so far.
    pub fn num_links(&self) -> usize {
        self.num_links
    }

    fn check_site(&self, site: usize) -> Result<()> {
        if site >= self.num_bits {
            Err(TtnError::InvalidSite(site, self.num_bits))
        } else {
            Ok(())
        }
    }

    /// Adds an undirected link between `a` and `b`, returning its id.
    pub fn add_link(&mut self, a: usize, b: usize) -> Result<usize> {
        self.check_site(a)?;
        self.check_site(b)?;
        if a == b {
            return Err(TtnError::SelfLink(a));
        }
        if self.has_link(a, b) {
            return Err(TtnError::LinkExists(a, b));
        }
        let link = self.num_links;
        self.num_links += 1;
        self.neighbors[a].push(Neighbor { site: b, link });
        self.neighbors[b].push(Neighbor { site: a, link });
        Ok(link)
    }

    /// Whether `a` and `b` are directly linked.
    pub fn has_link(&self, a: usize, b: usize) -> bool {
        if a >= self.num_bits {
            return false;
        }
        self.neighbors[a].iter().any(|n| n.site == b)
    }

    /// The link id between `a` and `b`.
    pub fn link_id(&self, a: usize, b: usize) -> Result<usize> {
        self.neighbors
            .get(a)
            .and_then(|ns| ns.iter().find(|n| n.site == b))
            .map(|n| n.link)
            .ok_or(TtnError::NoSuchLink(a, b))
    }

    /// The neighbors of a site.
    pub fn neighbors_of(&self, site: usize) -> &[Neighbor] {
        &self.neighbors[site]
    }

    /// Whether the graph is connected (every site reachable from site 0).
    pub fn is_connected(&self) -> bool {
        if self.num_bits == 0 {
            return true;
        }
        let mut visited = vec![false; self.num_bits];
        let mut queue = VecDeque::new();
        visited[0] = true;
        queue.push_back(0);
        let mut count = 1;
        while let Some(cur) = queue.pop_front() {
            for n in &self.neighbors[cur] {
                if !visited[n.site] {
                    visited[n.site] = true;
                    count += 1;
                    queue.push_back(n.site);
                }
            }
        }
        count == self.num_bits
    }

    /// Finds a path of sites to walk the orthogonality center from the
    /// `origin` edge onto the `dest` edge.
    ///
    /// BFS is seeded simultaneously from both endpoints of `origin`
    /// (origin.0 pushed before origin.1, giving it priority on ties).
    /// The returned path excludes the origin endpoints, and ends with
    /// whichever `dest` endpoint was *not* the one first reached.
    pub fn route(&self, origin: (usize, usize), dest: (usize, usize)) -> Result<Vec<usize>> {
        let (a, b) = origin;
        let (d1, d2) = dest;

        if (a == d1 && b == d2) || (a == d2 && b == d1) {
            return Ok(Vec::new());
        }

        let mut visited: HashSet<usize> = HashSet::new();
        let mut parent: HashMap<usize, usize> = HashMap::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        for &root in &[a, b] {
            if visited.insert(root) {
                queue.push_back(root);
            }
        }

        let mut reached = None;
        while let Some(cur) = queue.pop_front() {
            if cur == d1 || cur == d2 {
                reached = Some(cur);
                break;
            }
            for n in &self.neighbors[cur] {
                if visited.insert(n.site) {
                    parent.insert(n.site, cur);
                    queue.push_back(n.site);
                }
            }
        }

        let reached = reached.ok_or(TtnError::Unreachable(origin, dest))?;

        let mut path = Vec::new();
        let mut node = reached;
        while let Some(&p) = parent.get(&node) {
            path.push(node);
            node = p;
        }
        path.reverse();

        let other_dest = if reached == d1 { d2 } else { d1 };
        path.push(other_dest);
        Ok(path)
    }
}
