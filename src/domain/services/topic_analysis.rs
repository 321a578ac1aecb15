// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// 通用英文停用词（节选）与领域停用词，清洗试卷文本时剔除
const STOPWORDS: &[&str] = &[
    // General English
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have",
    "in", "is", "it", "its", "of", "on", "or", "that", "the", "to", "was", "were",
    "what", "which", "will", "with", "explain", "define", "describe", "write",
    "any", "each", "following", "using", "marks",
    // Domain noise carried over from the portal and paper headers
    "ktu", "notes", "examtimetable", "question", "paper", "exam", "university",
    "semester", "scheme", "previous", "year", "subject", "syllabus", "mark",
    "department", "course", "common", "branch", "students", "solution",
];

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("static pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static pattern"));

/// 预置的课程主题表
///
/// 主题频率统计针对这些预定义主题进行；未收录的课程
/// 返回空表，由调用方提示而不是报错
pub fn course_topics(course_code: &str) -> &'static [&'static str] {
    match course_code.trim().to_uppercase().as_str() {
        "MAT206" => GRAPH_THEORY_TOPICS,
        "CST202" => COMPUTER_ORGANIZATION_TOPICS,
        "CST204" => DATABASE_MANAGEMENT_TOPICS,
        "CST206" => OPERATING_SYSTEMS_TOPICS,
        "HUT200" => PROFESSIONAL_ETHICS_TOPICS,
        "MCN202" => CONSTITUTION_OF_INDIA_TOPICS,
        "CST208" => DESIGN_AND_ENGINEERING_TOPICS,
        "CSL202" => OPERATING_SYSTEMS_LAB_TOPICS,
        "CSL204" => DIGITAL_LAB_TOPICS,
        _ => &[],
    }
}

const GRAPH_THEORY_TOPICS: &[&str] = &[
    "Euler graph", "Hamiltonian circuit", "chromatic number", "planar graph",
    "adjacency matrix", "incidence matrix", "spanning tree", "Dijkstra's algorithm",
    "Prims algorithm", "bipartite graph", "cut-set", "four color theorem",
    "connected graph", "fundamental circuits", "travelling salesman problem",
    "tree", "binary tree", "graph coloring", "matching", "isomorphism",
    "vertex cover", "shortest path", "network flow", "cycle", "degree of vertex",
];

const COMPUTER_ORGANIZATION_TOPICS: &[&str] = &[
    "Basic Structure of Computers", "Functional Units", "Bus Structures",
    "Memory Locations and Addresses", "Memory Operations", "Instruction Sequencing",
    "Addressing Modes", "Basic Processing Unit", "Instruction Cycle",
    "Register Transfer Logic", "Arithmetic Operations", "Logic Operations",
    "Shift Micro-Operations",
];

const DATABASE_MANAGEMENT_TOPICS: &[&str] = &[
    "Database System Concepts", "Data Models", "ER Model", "Relational Model",
    "SQL", "Query Processing", "Normalization", "Database Design",
    "Transaction Management", "Concurrency Control", "Recovery Systems",
    "Indexing and Hashing", "NoSQL Databases", "Distributed Databases",
    "Database Security",
];

const OPERATING_SYSTEMS_TOPICS: &[&str] = &[
    "Introduction to Operating Systems", "Process Management",
    "Threads and Concurrency", "CPU Scheduling", "Process Synchronization",
    "Deadlocks", "Memory Management", "Virtual Memory", "File Systems",
    "I/O Systems", "Security and Protection", "UNIX", "Windows",
];

const DESIGN_AND_ENGINEERING_TOPICS: &[&str] = &[
    "Design Process", "Problem-Solving Techniques", "Creativity in Design",
    "Engineering Ethics", "Sustainability in Design", "Project Management",
    "Prototyping and Testing", "Communication of Designs", "Case Studies",
];

const PROFESSIONAL_ETHICS_TOPICS: &[&str] = &[
    "Introduction to Ethics", "Engineering Ethics", "Professional Responsibilities",
    "Ethical Theories", "Code of Ethics", "Risk and Liability",
    "Workplace Rights", "Global Ethical Issues", "Case Studies",
];

const CONSTITUTION_OF_INDIA_TOPICS: &[&str] = &[
    "Preamble", "Salient Features", "Fundamental Rights", "Directive Principles",
    "Union and State Governments", "Judiciary System", "Electoral Process",
    "Amendments", "Special Provisions", "Emergency Provisions",
    "Constitutional Bodies",
];

const DIGITAL_LAB_TOPICS: &[&str] = &[
    "Logic Gates", "Combinational Logic", "Sequential Logic", "Flip-Flops",
    "Counters", "Multiplexers", "Demultiplexers", "Analog-to-Digital Converters",
    "Digital-to-Analog Converters", "Memory Devices", "Digital System Implementation",
];

const OPERATING_SYSTEMS_LAB_TOPICS: &[&str] = &[
    "Shell Programming", "Process Creation", "Inter-Process Communication",
    "Thread Programming", "CPU Scheduling", "Memory Management",
    "File System Implementation", "Deadlock Detection", "Deadlock Avoidance",
];

/// 清洗试卷文本
///
/// 小写化、去数字、合并空白并剔除停用词，为频率统计做准备
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_digits = DIGITS.replace_all(&lowered, "");
    let collapsed = WHITESPACE.replace_all(without_digits.trim(), " ");

    collapsed
        .split(' ')
        .map(|word| word.trim_matches(|c: char| !c.is_ascii_alphanumeric()))
        .filter(|word| !word.is_empty() && !STOPWORDS.contains(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// 统计预定义主题的出现频率
///
/// 对每个主题取首词作词干，按`\b{stem}\w*\b`大小写不敏感计数，
/// 因此`graph coloring`的词干`graph`也能命中`graphs`。
/// 结果按频次降序（同频按主题名）排列，未出现的主题不在结果中
pub fn analyze_topics(text: &str, topics: &[&str]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for topic in topics {
        let stem = match topic.split_whitespace().next() {
            Some(stem) => stem,
            None => continue,
        };
        let pattern = match Regex::new(&format!(r"(?i)\b{}\w*\b", regex::escape(stem))) {
            Ok(p) => p,
            Err(_) => continue,
        };

        let count = pattern.find_iter(text).count();
        if count > 0 {
            counts.push((topic.to_string(), count));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
