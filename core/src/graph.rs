use std::collections::HashMap;
use std::hash::Hash;

/// In-memory directed graph: vertex index + per-vertex successor lists.
///
/// Vertices keep their insertion order, and each successor list keeps the
/// order its arcs were added in, so every traversal over the graph is
/// deterministic. Duplicate arcs are stored as-is.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    index: HashMap<T, usize>,
    vertices: Vec<T>,
    outgoing: Vec<Vec<T>>,
}

impl<T> Graph<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            vertices: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// Pre-allocate for a known number of vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            index: HashMap::with_capacity(vertex_count),
            vertices: Vec::with_capacity(vertex_count),
            outgoing: Vec::with_capacity(vertex_count),
        }
    }

    /// Insert a vertex with no outgoing arcs.
    ///
    /// Returns false, leaving the graph untouched, if it is already present.
    pub fn add_vertex(&mut self, vertex: T) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.outgoing.push(Vec::new());
        true
    }

    /// Append a directed arc `from -> to`.
    ///
    /// Both endpoints must already be present; otherwise nothing changes and
    /// false is returned.
    pub fn connect(&mut self, from: &T, to: &T) -> bool {
        if !self.index.contains_key(to) {
            return false;
        }
        match self.index.get(from) {
            Some(&slot) => {
                self.outgoing[slot].push(to.clone());
                true
            }
            None => false,
        }
    }

    /// Add the arcs `a -> b` and `b -> a`. All-or-nothing.
    pub fn connect_both(&mut self, a: &T, b: &T) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        self.connect(a, b) && self.connect(b, a)
    }

    /// Bulk load undirected pairs, creating vertices as they are first seen.
    /// Returns the number of pairs loaded.
    pub fn load_pairs<I>(&mut self, pairs: I) -> usize
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let mut loaded = 0;
        for (a, b) in pairs {
            self.add_vertex(a.clone());
            self.add_vertex(b.clone());
            if self.connect_both(&a, &b) {
                loaded += 1;
            }
        }
        loaded
    }

    pub fn contains(&self, vertex: &T) -> bool {
        self.index.contains_key(vertex)
    }

    /// Owned copy of the successors of `vertex`; empty if it is absent.
    pub fn out_edges(&self, vertex: &T) -> Vec<T> {
        self.neighbors(vertex).to_vec()
    }

    /// Borrowed view of the successors of `vertex`; empty if it is absent.
    pub fn neighbors(&self, vertex: &T) -> &[T] {
        self.index
            .get(vertex)
            .map(|&slot| self.outgoing[slot].as_slice())
            .unwrap_or(&[])
    }

    pub fn degree(&self, vertex: &T) -> usize {
        self.neighbors(vertex).len()
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &T> {
        self.vertices.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of stored arcs. An undirected friendship counts twice.
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(|v| v.len()).sum()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let vertex_mem = self.vertices.len() * (2 * size_of::<T>() + size_of::<usize>() + 40);
        let arc_mem = self.edge_count() * size_of::<T>();
        let list_mem = self.outgoing.len() * size_of::<Vec<T>>();

        vertex_mem + arc_mem + list_mem
    }
}

impl<T> Default for Graph<T>
where
    T: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_vertex_once() {
        let mut g: Graph<String> = Graph::new();
        assert!(!g.contains(&"ann".to_string()));
        assert!(g.add_vertex("ann".to_string()));
        assert!(g.contains(&"ann".to_string()));
        assert_eq!(g.vertex_count(), 1);
    }

    #[test]
    fn test_add_vertex_duplicate_is_noop() {
        let mut g = Graph::new();
        g.add_vertex("ann".to_string());
        g.add_vertex("bob".to_string());
        g.connect(&"ann".to_string(), &"bob".to_string());

        assert!(!g.add_vertex("ann".to_string()));
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.out_edges(&"ann".to_string()), names(&["bob"]));
    }

    #[test]
    fn test_connect_requires_both_endpoints() {
        let mut g = Graph::new();
        g.add_vertex(1u64);
        assert!(!g.connect(&1, &2));
        assert!(!g.connect(&2, &1));
        assert!(!g.connect(&3, &4));
        assert_eq!(g.edge_count(), 0);
        assert!(g.out_edges(&1).is_empty());
        // A failed connect must not create the missing endpoint.
        assert!(!g.contains(&2));
    }

    #[test]
    fn test_connect_is_directed() {
        let mut g = Graph::new();
        g.add_vertex(1u64);
        g.add_vertex(2u64);
        assert!(g.connect(&1, &2));
        assert_eq!(g.out_edges(&1), vec![2]);
        assert!(g.out_edges(&2).is_empty());
    }

    #[test]
    fn test_duplicate_arcs_kept() {
        let mut g = Graph::new();
        g.add_vertex(1u64);
        g.add_vertex(2u64);
        for expected in 1..=3 {
            assert!(g.connect(&1, &2));
            assert_eq!(g.out_edges(&1).iter().filter(|&&v| v == 2).count(), expected);
        }
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.degree(&1), 3);
    }

    #[test]
    fn test_self_loop() {
        let mut g = Graph::new();
        g.add_vertex(7u64);
        assert!(g.connect(&7, &7));
        assert_eq!(g.out_edges(&7), vec![7]);
    }

    #[test]
    fn test_out_edges_preserve_insertion_order() {
        let mut g = Graph::new();
        for v in ["a", "b", "c", "d"] {
            g.add_vertex(v);
        }
        g.connect(&"a", &"d");
        g.connect(&"a", &"b");
        g.connect(&"a", &"c");
        assert_eq!(g.out_edges(&"a"), vec!["d", "b", "c"]);
    }

    #[test]
    fn test_out_edges_absent_vertex() {
        let g: Graph<u64> = Graph::new();
        assert!(g.out_edges(&42).is_empty());
        assert!(g.neighbors(&42).is_empty());
        assert_eq!(g.degree(&42), 0);
    }

    #[test]
    fn test_out_edges_is_a_copy() {
        let mut g = Graph::new();
        g.add_vertex(1u64);
        g.add_vertex(2u64);
        g.connect(&1, &2);

        let mut copy = g.out_edges(&1);
        copy.push(99);
        copy[0] = 100;
        assert_eq!(g.out_edges(&1), vec![2]);

        // Later mutation of the graph does not reach an earlier copy.
        let before = g.out_edges(&1);
        g.add_vertex(3);
        g.connect(&1, &3);
        assert_eq!(before, vec![2]);
        assert_eq!(g.out_edges(&1), vec![2, 3]);
    }

    #[test]
    fn test_connect_both() {
        let mut g = Graph::new();
        g.add_vertex("a");
        g.add_vertex("b");
        assert!(g.connect_both(&"a", &"b"));
        assert_eq!(g.out_edges(&"a"), vec!["b"]);
        assert_eq!(g.out_edges(&"b"), vec!["a"]);

        assert!(!g.connect_both(&"a", &"zed"));
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_load_pairs() {
        let mut g = Graph::new();
        let loaded = g.load_pairs(vec![("a", "b"), ("b", "c"), ("a", "b")]);
        assert_eq!(loaded, 3);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.out_edges(&"a"), vec!["b", "b"]);
        assert_eq!(g.out_edges(&"b"), vec!["a", "c", "a"]);
        assert_eq!(g.vertices().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_memory_usage_nonzero() {
        let mut g = Graph::with_capacity(2);
        g.load_pairs(vec![(1u64, 2u64)]);
        assert!(g.memory_usage() > 0);
    }
}
