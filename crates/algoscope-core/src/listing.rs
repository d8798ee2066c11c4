//! Fixed, numbered source listings used for "current line" narration.
//!
//! Every algorithm has one listing per presentation language. Listings for
//! the same algorithm are aligned line for line, so a step's `code_line`
//! highlights the equivalent statement in either language.

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;

/// Presentation language of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    JavaScript,
    Rust,
}

/// A static, read-only listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeListing {
    pub algorithm: AlgorithmKind,
    pub language: Language,
    pub lines: &'static [&'static str],
}

impl CodeListing {
    pub fn line(&self, index: usize) -> Option<&'static str> {
        self.lines.get(index).copied()
    }
}

/// Look up the listing for an algorithm.
pub fn listing(algorithm: AlgorithmKind, language: Language) -> CodeListing {
    use AlgorithmKind::*;

    let (js, rs): (&'static [&'static str], &'static [&'static str]) = match algorithm {
        Bubble => (BUBBLE_JS, BUBBLE_RS),
        Insertion => (INSERTION_JS, INSERTION_RS),
        Selection => (SELECTION_JS, SELECTION_RS),
        Merge => (MERGE_JS, MERGE_RS),
        Quick => (QUICK_JS, QUICK_RS),
        Heap => (HEAP_JS, HEAP_RS),
        Radix => (RADIX_JS, RADIX_RS),
        Bucket => (BUCKET_JS, BUCKET_RS),
        Bfs => (BFS_JS, BFS_RS),
        Dfs => (DFS_JS, DFS_RS),
        Dijkstra => (DIJKSTRA_JS, DIJKSTRA_RS),
        NQueens => (NQUEENS_JS, NQUEENS_RS),
        Sudoku => (SUDOKU_JS, SUDOKU_RS),
        Hanoi => (HANOI_JS, HANOI_RS),
        Stack => (STACK_JS, STACK_RS),
        Queue => (QUEUE_JS, QUEUE_RS),
        LinkedList => (LIST_JS, LIST_RS),
        BinaryTree => (TREE_JS, TREE_RS),
    };

    CodeListing {
        algorithm,
        language,
        lines: match language {
            Language::JavaScript => js,
            Language::Rust => rs,
        },
    }
}

const BUBBLE_JS: &[&str] = &[
    "function bubbleSort(arr) {",
    "  for (let i = 0; i < arr.length - 1; i++) {",
    "    for (let j = 0; j < arr.length - i - 1; j++) {",
    "      if (arr[j] > arr[j + 1]) {",
    "        [arr[j], arr[j + 1]] = [arr[j + 1], arr[j]];",
    "      }",
    "    }",
    "  }",
    "  return arr;",
    "}",
];

const BUBBLE_RS: &[&str] = &[
    "fn bubble_sort(mut arr: Vec<u32>) -> Vec<u32> {",
    "    for i in 0..arr.len().saturating_sub(1) {",
    "        for j in 0..arr.len() - i - 1 {",
    "            if arr[j] > arr[j + 1] {",
    "                arr.swap(j, j + 1);",
    "            }",
    "        }",
    "    }",
    "    arr",
    "}",
];

const INSERTION_JS: &[&str] = &[
    "function insertionSort(arr) {",
    "  for (let i = 1; i < arr.length; i++) {",
    "    let key = arr[i];",
    "    let j = i - 1;",
    "    while (j >= 0 && arr[j] > key) {",
    "      arr[j + 1] = arr[j];",
    "      j--;",
    "    }",
    "    arr[j + 1] = key;",
    "  }",
    "  return arr;",
    "}",
];

const INSERTION_RS: &[&str] = &[
    "fn insertion_sort(mut arr: Vec<u32>) -> Vec<u32> {",
    "    for i in 1..arr.len() {",
    "        let key = arr[i];",
    "        let mut j = i;",
    "        while j > 0 && arr[j - 1] > key {",
    "            arr[j] = arr[j - 1];",
    "            j -= 1;",
    "        }",
    "        arr[j] = key;",
    "    }",
    "    arr",
    "}",
];

const SELECTION_JS: &[&str] = &[
    "function selectionSort(arr) {",
    "  for (let i = 0; i < arr.length - 1; i++) {",
    "    let minIndex = i;",
    "    for (let j = i + 1; j < arr.length; j++) {",
    "      if (arr[j] < arr[minIndex]) {",
    "        minIndex = j;",
    "      }",
    "    }",
    "    [arr[i], arr[minIndex]] = [arr[minIndex], arr[i]];",
    "  }",
    "  return arr;",
    "}",
];

const SELECTION_RS: &[&str] = &[
    "fn selection_sort(mut arr: Vec<u32>) -> Vec<u32> {",
    "    for i in 0..arr.len().saturating_sub(1) {",
    "        let mut min_index = i;",
    "        for j in i + 1..arr.len() {",
    "            if arr[j] < arr[min_index] {",
    "                min_index = j;",
    "            }",
    "        }",
    "        arr.swap(i, min_index);",
    "    }",
    "    arr",
    "}",
];

const MERGE_JS: &[&str] = &[
    "function mergeSort(arr) {",
    "  const n = arr.length;",
    "  for (let size = 1; size < n; size *= 2) {",
    "    for (let start = 0; start < n; start += 2 * size) {",
    "      const mid = Math.min(start + size, n);",
    "      const end = Math.min(start + 2 * size, n);",
    "      merge(arr, start, mid, end);",
    "    }",
    "  }",
    "  return arr;",
    "}",
    "function merge(arr, start, mid, end) {",
    "  const left = arr.slice(start, mid), right = arr.slice(mid, end);",
    "  let i = 0, j = 0, k = start;",
    "  while (i < left.length && j < right.length) {",
    "    arr[k++] = left[i] <= right[j] ? left[i++] : right[j++];",
    "  }",
    "  while (i < left.length) arr[k++] = left[i++];",
    "  while (j < right.length) arr[k++] = right[j++];",
    "}",
];

const MERGE_RS: &[&str] = &[
    "fn merge_sort(mut arr: Vec<u32>) -> Vec<u32> {",
    "    let n = arr.len();",
    "    for size in (0..usize::BITS).map(|p| 1usize << p).take_while(|&s| s < n) {",
    "        for start in (0..n).step_by(2 * size) {",
    "            let mid = (start + size).min(n);",
    "            let end = (start + 2 * size).min(n);",
    "            merge(&mut arr, start, mid, end);",
    "        }",
    "    }",
    "    arr",
    "}",
    "fn merge(arr: &mut [u32], start: usize, mid: usize, end: usize) {",
    "    let (left, right) = (arr[start..mid].to_vec(), arr[mid..end].to_vec());",
    "    let (mut i, mut j, mut k) = (0, 0, start);",
    "    while i < left.len() && j < right.len() {",
    "        arr[k] = if left[i] <= right[j] { i += 1; left[i - 1] } else { j += 1; right[j - 1] }; k += 1;",
    "    }",
    "    for &v in &left[i..] { arr[k] = v; k += 1; }",
    "    for &v in &right[j..] { arr[k] = v; k += 1; }",
    "}",
];

const QUICK_JS: &[&str] = &[
    "function quickSort(arr, low = 0, high = arr.length - 1) {",
    "  if (low < high) {",
    "    const pi = partition(arr, low, high);",
    "    quickSort(arr, low, pi - 1);",
    "    quickSort(arr, pi + 1, high);",
    "  }",
    "  return arr;",
    "}",
    "function partition(arr, low, high) {",
    "  const pivot = arr[high];",
    "  let i = low - 1;",
    "  for (let j = low; j < high; j++) {",
    "    if (arr[j] < pivot) {",
    "      i++;",
    "      [arr[i], arr[j]] = [arr[j], arr[i]];",
    "    }",
    "  }",
    "  [arr[i + 1], arr[high]] = [arr[high], arr[i + 1]];",
    "  return i + 1;",
    "}",
];

const QUICK_RS: &[&str] = &[
    "fn quick_sort(arr: &mut [u32]) {",
    "    if arr.len() > 1 {",
    "        let pi = partition(arr);",
    "        quick_sort(&mut arr[..pi]);",
    "        quick_sort(&mut arr[pi + 1..]);",
    "    }",
    "    // arr is sorted in place",
    "}",
    "fn partition(arr: &mut [u32]) -> usize {",
    "    let (high, pivot) = (arr.len() - 1, arr[arr.len() - 1]);",
    "    let mut i = 0;",
    "    for j in 0..high {",
    "        if arr[j] < pivot {",
    "            // grow the left partition",
    "            arr.swap(i, j); i += 1;",
    "        }",
    "    }",
    "    arr.swap(i, high);",
    "    i",
    "}",
];

const HEAP_JS: &[&str] = &[
    "function heapSort(arr) {",
    "  const n = arr.length;",
    "  for (let i = Math.floor(n / 2) - 1; i >= 0; i--) {",
    "    heapify(arr, n, i);",
    "  }",
    "  for (let end = n - 1; end > 0; end--) {",
    "    [arr[0], arr[end]] = [arr[end], arr[0]];",
    "    heapify(arr, end, 0);",
    "  }",
    "  return arr;",
    "}",
    "function heapify(arr, size, root) {",
    "  let largest = root;",
    "  const left = 2 * root + 1, right = 2 * root + 2;",
    "  if (left < size && arr[left] > arr[largest]) largest = left;",
    "  if (right < size && arr[right] > arr[largest]) largest = right;",
    "  if (largest !== root) {",
    "    [arr[root], arr[largest]] = [arr[largest], arr[root]];",
    "    heapify(arr, size, largest);",
    "  }",
    "}",
];

const HEAP_RS: &[&str] = &[
    "fn heap_sort(mut arr: Vec<u32>) -> Vec<u32> {",
    "    let n = arr.len();",
    "    for i in (0..n / 2).rev() {",
    "        heapify(&mut arr, n, i);",
    "    }",
    "    for end in (1..n).rev() {",
    "        arr.swap(0, end);",
    "        heapify(&mut arr, end, 0);",
    "    }",
    "    arr",
    "}",
    "fn heapify(arr: &mut [u32], size: usize, root: usize) {",
    "    let mut largest = root;",
    "    let (left, right) = (2 * root + 1, 2 * root + 2);",
    "    if left < size && arr[left] > arr[largest] { largest = left; }",
    "    if right < size && arr[right] > arr[largest] { largest = right; }",
    "    if largest != root {",
    "        arr.swap(root, largest);",
    "        heapify(arr, size, largest);",
    "    }",
    "}",
];

const RADIX_JS: &[&str] = &[
    "function radixSort(arr) {",
    "  const max = Math.max(...arr);",
    "  for (let place = 1; Math.floor(max / place) > 0; place *= 10) {",
    "    const buckets = Array.from({ length: 10 }, () => []);",
    "    for (const value of arr) {",
    "      buckets[Math.floor(value / place) % 10].push(value);",
    "    }",
    "    arr = buckets.flat();",
    "  }",
    "  return arr;",
    "}",
];

const RADIX_RS: &[&str] = &[
    "fn radix_sort(mut arr: Vec<u32>) -> Vec<u32> {",
    "    let max = arr.iter().copied().max().unwrap_or(0);",
    "    for place in (0..10).map(|d| 10u32.pow(d)).take_while(|&p| max / p > 0) {",
    "        let mut buckets = vec![Vec::new(); 10];",
    "        for &value in &arr {",
    "            buckets[(value / place % 10) as usize].push(value);",
    "        }",
    "        arr = buckets.concat();",
    "    }",
    "    arr",
    "}",
];

const BUCKET_JS: &[&str] = &[
    "function bucketSort(arr) {",
    "  const n = arr.length, max = Math.max(...arr);",
    "  const buckets = Array.from({ length: n }, () => []);",
    "  for (const value of arr) {",
    "    buckets[Math.floor((value * n) / (max + 1))].push(value);",
    "  }",
    "  let k = 0;",
    "  for (const bucket of buckets) {",
    "    insertionSort(bucket);",
    "    for (const value of bucket) arr[k++] = value;",
    "  }",
    "  return arr;",
    "}",
];

const BUCKET_RS: &[&str] = &[
    "fn bucket_sort(mut arr: Vec<u32>) -> Vec<u32> {",
    "    let (n, max) = (arr.len(), arr.iter().copied().max().unwrap_or(0) as usize);",
    "    let mut buckets = vec![Vec::new(); n];",
    "    for &value in &arr {",
    "        buckets[value as usize * n / (max + 1)].push(value);",
    "    }",
    "    let mut k = 0;",
    "    for bucket in &mut buckets {",
    "        bucket.sort_unstable();",
    "        for &value in bucket.iter() { arr[k] = value; k += 1; }",
    "    }",
    "    arr",
    "}",
];

const BFS_JS: &[&str] = &[
    "function bfs(graph, start) {",
    "  const queue = [start];",
    "  const visited = new Set();",
    "  const result = [];",
    "  while (queue.length > 0) {",
    "    const node = queue.shift();",
    "    if (!visited.has(node)) {",
    "      visited.add(node);",
    "      result.push(node);",
    "      queue.push(...graph[node]);",
    "    }",
    "  }",
    "  return result;",
    "}",
];

const BFS_RS: &[&str] = &[
    "fn bfs(graph: &Graph, start: NodeId) -> Vec<NodeId> {",
    "    let mut queue = VecDeque::from([start]);",
    "    let mut visited = HashSet::new();",
    "    let mut result = Vec::new();",
    "    while !queue.is_empty() {",
    "        let node = queue.pop_front().unwrap();",
    "        if !visited.contains(&node) {",
    "            visited.insert(node.clone());",
    "            result.push(node.clone());",
    "            queue.extend(graph.neighbors(&node));",
    "        }",
    "    }",
    "    result",
    "}",
];

const DFS_JS: &[&str] = &[
    "function dfs(graph, start, visited = new Set()) {",
    "  visited.add(start);",
    "  console.log(start);",
    "  for (const neighbor of graph[start]) {",
    "    if (!visited.has(neighbor)) {",
    "      dfs(graph, neighbor, visited);",
    "    }",
    "  }",
    "}",
];

const DFS_RS: &[&str] = &[
    "fn dfs(graph: &Graph, start: &NodeId, visited: &mut HashSet<NodeId>) {",
    "    visited.insert(start.clone());",
    "    println!(\"{start}\");",
    "    for neighbor in graph.neighbors(start) {",
    "        if !visited.contains(&neighbor) {",
    "            dfs(graph, &neighbor, visited);",
    "        }",
    "    }",
    "}",
];

const DIJKSTRA_JS: &[&str] = &[
    "function dijkstra(graph, start) {",
    "  const distances = {};",
    "  const previous = {};",
    "  const unvisited = new Set(Object.keys(graph));",
    "  for (const node of unvisited) {",
    "    distances[node] = node === start ? 0 : Infinity;",
    "  }",
    "  while (unvisited.size > 0) {",
    "    const current = minBy(unvisited, (n) => distances[n]);",
    "    if (distances[current] === Infinity) break;",
    "    unvisited.delete(current);",
    "    for (const [neighbor, weight] of graph[current]) {",
    "      const alt = distances[current] + weight;",
    "      if (unvisited.has(neighbor) && alt < distances[neighbor]) {",
    "        distances[neighbor] = alt;",
    "        previous[neighbor] = current;",
    "      }",
    "    }",
    "  }",
    "  return { distances, previous };",
    "}",
];

const DIJKSTRA_RS: &[&str] = &[
    "fn dijkstra(graph: &Graph, start: &NodeId) -> (HashMap<NodeId, u64>, HashMap<NodeId, NodeId>) {",
    "    let mut distances = HashMap::new();",
    "    let mut previous = HashMap::new();",
    "    let mut unvisited: Vec<NodeId> = graph.node_ids().cloned().collect();",
    "    for node in &unvisited {",
    "        distances.insert(node.clone(), if node == start { 0 } else { u64::MAX });",
    "    }",
    "    while !unvisited.is_empty() {",
    "        let idx = (0..unvisited.len()).min_by_key(|&i| distances[&unvisited[i]]).unwrap();",
    "        if distances[&unvisited[idx]] == u64::MAX { break; }",
    "        let current = unvisited.remove(idx);",
    "        for (neighbor, weight) in graph.weighted_neighbors(&current) {",
    "            let alt = distances[&current] + weight as u64;",
    "            if unvisited.contains(&neighbor) && alt < distances[&neighbor] {",
    "                distances.insert(neighbor.clone(), alt);",
    "                previous.insert(neighbor, current.clone());",
    "            }",
    "        }",
    "    }",
    "    (distances, previous)",
    "}",
];

const NQUEENS_JS: &[&str] = &[
    "function solveNQueens(n, row = 0, cols = []) {",
    "  if (row === n) return true;",
    "  for (let col = 0; col < n; col++) {",
    "    if (isSafe(cols, row, col)) {",
    "      cols.push(col);",
    "      if (solveNQueens(n, row + 1, cols)) return true;",
    "      cols.pop();",
    "    }",
    "  }",
    "  return false;",
    "}",
    "function isSafe(cols, row, col) {",
    "  return cols.every((c, r) => c !== col && Math.abs(c - col) !== row - r);",
    "}",
];

const NQUEENS_RS: &[&str] = &[
    "fn solve_n_queens(n: usize, row: usize, cols: &mut Vec<usize>) -> bool {",
    "    if row == n { return true; }",
    "    for col in 0..n {",
    "        if is_safe(cols, row, col) {",
    "            cols.push(col);",
    "            if solve_n_queens(n, row + 1, cols) { return true; }",
    "            cols.pop();",
    "        }",
    "    }",
    "    false",
    "}",
    "fn is_safe(cols: &[usize], row: usize, col: usize) -> bool {",
    "    cols.iter().enumerate().all(|(r, &c)| c != col && c.abs_diff(col) != row - r)",
    "}",
];

const SUDOKU_JS: &[&str] = &[
    "function solveSudoku(board, size) {",
    "  for (let row = 0; row < size; row++) {",
    "    for (let col = 0; col < size; col++) {",
    "      if (!board[row][col]) {",
    "        for (let num = 1; num <= size; num++) {",
    "          if (isSafe(board, row, col, num, size)) {",
    "            board[row][col] = num;",
    "            if (solveSudoku(board, size)) return true;",
    "            board[row][col] = 0;",
    "          }",
    "        }",
    "        return false;",
    "      }",
    "    }",
    "  }",
    "  return true;",
    "}",
];

const SUDOKU_RS: &[&str] = &[
    "fn solve_sudoku(board: &mut Board) -> bool {",
    "    for row in 0..board.size() {",
    "        for col in 0..board.size() {",
    "            if board.get(row, col) == 0 {",
    "                for num in 1..=board.size() as u8 {",
    "                    if board.is_safe(row, col, num) {",
    "                        board.set(row, col, num);",
    "                        if solve_sudoku(board) { return true; }",
    "                        board.set(row, col, 0);",
    "                    }",
    "                }",
    "                return false;",
    "            }",
    "        }",
    "    }",
    "    true",
    "}",
];

const HANOI_JS: &[&str] = &[
    "function hanoi(n, from, to, via, moves = []) {",
    "  if (n === 0) return moves;",
    "  hanoi(n - 1, from, via, to, moves);",
    "  moves.push({ disk: n, from, to });",
    "  hanoi(n - 1, via, to, from, moves);",
    "  return moves;",
    "}",
];

const HANOI_RS: &[&str] = &[
    "fn hanoi(n: u32, from: Peg, to: Peg, via: Peg, moves: &mut Vec<Move>) {",
    "    if n == 0 { return; }",
    "    hanoi(n - 1, from, via, to, moves);",
    "    moves.push(Move { disk: n, from, to });",
    "    hanoi(n - 1, via, to, from, moves);",
    "    // moves now holds 2^n - 1 entries",
    "}",
];

const STACK_JS: &[&str] = &[
    "class Stack {",
    "  push(value) {",
    "    this.items.push(value);",
    "  }",
    "  pop() {",
    "    return this.items.pop();",
    "  }",
    "}",
];

const STACK_RS: &[&str] = &[
    "impl<T> Stack<T> {",
    "    fn push(&mut self, value: T) {",
    "        self.items.push(value);",
    "    }",
    "    fn pop(&mut self) -> Option<T> {",
    "        self.items.pop()",
    "    }",
    "}",
];

const QUEUE_JS: &[&str] = &[
    "class Queue {",
    "  enqueue(value) {",
    "    this.items.push(value);",
    "  }",
    "  dequeue() {",
    "    return this.items.shift();",
    "  }",
    "}",
];

const QUEUE_RS: &[&str] = &[
    "impl<T> Queue<T> {",
    "    fn enqueue(&mut self, value: T) {",
    "        self.items.push_back(value);",
    "    }",
    "    fn dequeue(&mut self) -> Option<T> {",
    "        self.items.pop_front()",
    "    }",
    "}",
];

const LIST_JS: &[&str] = &[
    "class LinkedList {",
    "  append(value) {",
    "    const node = { value, next: null };",
    "    if (!this.head) return void (this.head = node);",
    "    let current = this.head;",
    "    while (current.next) current = current.next;",
    "    current.next = node;",
    "  }",
    "  deleteHead() {",
    "    if (this.head) this.head = this.head.next;",
    "  }",
    "}",
];

const LIST_RS: &[&str] = &[
    "impl LinkedList {",
    "    fn append(&mut self, value: i64) {",
    "        let node = Box::new(Node { value, next: None });",
    "        let mut cursor = &mut self.head;",
    "        // walk to the empty slot after the tail",
    "        while let Some(current) = cursor { cursor = &mut current.next; }",
    "        *cursor = Some(node);",
    "    }",
    "    fn delete_head(&mut self) {",
    "        if let Some(head) = self.head.take() { self.head = head.next; }",
    "    }",
    "}",
];

const TREE_JS: &[&str] = &[
    "function insert(node, value) {",
    "  if (!node) return { value, left: null, right: null };",
    "  if (value < node.value) {",
    "    node.left = insert(node.left, value);",
    "  } else {",
    "    node.right = insert(node.right, value);",
    "  }",
    "  return node;",
    "}",
    "function traverse(node, order, out) {",
    "  if (!node) return;",
    "  if (order === 'preorder') out.push(node.value);",
    "  traverse(node.left, order, out);",
    "  if (order === 'inorder') out.push(node.value);",
    "  traverse(node.right, order, out);",
    "  if (order === 'postorder') out.push(node.value);",
    "}",
];

const TREE_RS: &[&str] = &[
    "fn insert(node: Option<Box<Node>>, value: i64) -> Option<Box<Node>> {",
    "    let Some(mut node) = node else { return Some(Node::leaf(value)) };",
    "    if value < node.value {",
    "        node.left = insert(node.left.take(), value);",
    "    } else {",
    "        node.right = insert(node.right.take(), value);",
    "    }",
    "    Some(node)",
    "}",
    "fn traverse(node: &Option<Box<Node>>, order: Order, out: &mut Vec<i64>) {",
    "    let Some(node) = node else { return };",
    "    if order == Order::Pre { out.push(node.value); }",
    "    traverse(&node.left, order, out);",
    "    if order == Order::In { out.push(node.value); }",
    "    traverse(&node.right, order, out);",
    "    if order == Order::Post { out.push(node.value); }",
    "}",
];
