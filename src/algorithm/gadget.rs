//! 图元（gadget）模式模块
//!
//! 五种固定的小型平面图元以声明式描述表示，由同一个通用匹配函数求解：
//!
//! | 优先级 | 图元 | 边 |
//! |---|---|---|
//! | 1 | House | xy, xz, yz, xw, zw, yv, xv |
//! | 2 | HouseAlt | xy, xz, yz, yw, zw, yv, wv |
//! | 3 | Diamond | xy, xz, yz, xw, zw |
//! | 4 | DiamondAlt | xy, xz, yz, yw, zw |
//! | 5 | Triangle | xy, xz, yz |
//!
//! x 是根节点，y 是 x 的某个未使用邻居；其余角色依次从某个已绑定角色的邻居列表中
//! 按邻接顺序选取，并且必须与指定角色相邻、尚未使用、与已绑定节点互不相同。

use std::collections::BTreeSet;
use std::fmt;

use crate::core::{Graph, NodeId, PlanarResult};

/// 图元中的节点角色，按绑定顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    X,
    Y,
    Z,
    W,
    V,
}

impl Role {
    fn index(self) -> usize {
        self as usize
    }
}

/// 单个角色的绑定规则
#[derive(Debug)]
pub struct RoleRule {
    /// 被绑定的角色
    pub role: Role,
    /// 候选节点取自该角色的邻居列表
    pub drawn_from: Role,
    /// 候选节点还必须与这些角色相邻
    pub adjacent_to: &'static [Role],
}

/// 图元种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GadgetKind {
    House,
    HouseAlt,
    Diamond,
    DiamondAlt,
    Triangle,
}

impl fmt::Display for GadgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GadgetKind::House => "house",
            GadgetKind::HouseAlt => "house-alt",
            GadgetKind::Diamond => "diamond",
            GadgetKind::DiamondAlt => "diamond-alt",
            GadgetKind::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// 图元描述：Y 之后各角色的绑定规则以及匹配成功后保留的边
#[derive(Debug)]
pub struct Gadget {
    pub kind: GadgetKind,
    rules: &'static [RoleRule],
    edges: &'static [(Role, Role)],
}

const Z_IN_TRIANGLE: RoleRule = RoleRule {
    role: Role::Z,
    drawn_from: Role::Y,
    adjacent_to: &[Role::X],
};

pub const HOUSE: Gadget = Gadget {
    kind: GadgetKind::House,
    rules: &[
        Z_IN_TRIANGLE,
        RoleRule {
            role: Role::W,
            drawn_from: Role::Z,
            adjacent_to: &[Role::X],
        },
        RoleRule {
            role: Role::V,
            drawn_from: Role::Y,
            adjacent_to: &[Role::X],
        },
    ],
    edges: &[
        (Role::X, Role::Y),
        (Role::X, Role::Z),
        (Role::Y, Role::Z),
        (Role::X, Role::W),
        (Role::Z, Role::W),
        (Role::Y, Role::V),
        (Role::X, Role::V),
    ],
};

pub const HOUSE_ALT: Gadget = Gadget {
    kind: GadgetKind::HouseAlt,
    rules: &[
        Z_IN_TRIANGLE,
        RoleRule {
            role: Role::W,
            drawn_from: Role::Z,
            adjacent_to: &[Role::Y],
        },
        RoleRule {
            role: Role::V,
            drawn_from: Role::Y,
            adjacent_to: &[Role::W],
        },
    ],
    edges: &[
        (Role::X, Role::Y),
        (Role::X, Role::Z),
        (Role::Y, Role::Z),
        (Role::Y, Role::W),
        (Role::Z, Role::W),
        (Role::Y, Role::V),
        (Role::W, Role::V),
    ],
};

pub const DIAMOND: Gadget = Gadget {
    kind: GadgetKind::Diamond,
    rules: &[
        Z_IN_TRIANGLE,
        RoleRule {
            role: Role::W,
            drawn_from: Role::Z,
            adjacent_to: &[Role::X],
        },
    ],
    edges: &[
        (Role::X, Role::Y),
        (Role::X, Role::Z),
        (Role::Y, Role::Z),
        (Role::X, Role::W),
        (Role::Z, Role::W),
    ],
};

pub const DIAMOND_ALT: Gadget = Gadget {
    kind: GadgetKind::DiamondAlt,
    rules: &[
        Z_IN_TRIANGLE,
        RoleRule {
            role: Role::W,
            drawn_from: Role::Z,
            adjacent_to: &[Role::Y],
        },
    ],
    edges: &[
        (Role::X, Role::Y),
        (Role::X, Role::Z),
        (Role::Y, Role::Z),
        (Role::Y, Role::W),
        (Role::Z, Role::W),
    ],
};

pub const TRIANGLE: Gadget = Gadget {
    kind: GadgetKind::Triangle,
    rules: &[Z_IN_TRIANGLE],
    edges: &[(Role::X, Role::Y), (Role::X, Role::Z), (Role::Y, Role::Z)],
};

/// 按优先级排列的图元：越稠密的图元越先获得未使用节点
pub static GADGETS: [Gadget; 5] = [HOUSE, HOUSE_ALT, DIAMOND, DIAMOND_ALT, TRIANGLE];

/// 一次成功的图元匹配
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GadgetMatch {
    kind: GadgetKind,
    edges: &'static [(Role, Role)],
    /// 按角色顺序排列的节点，下标 0 是根节点 x
    nodes: Vec<NodeId>,
}

impl GadgetMatch {
    pub fn kind(&self) -> GadgetKind {
        self.kind
    }

    /// 新占用的节点（y 及之后的角色）
    pub fn participants(&self) -> &[NodeId] {
        &self.nodes[Role::Y.index()..]
    }

    /// 图元保留的边
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.edges
            .iter()
            .map(|(a, b)| (self.nodes[a.index()], self.nodes[b.index()]))
    }
}

impl Gadget {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_count(&self) -> usize {
        self.rules.len() + 2
    }

    /// 以 x 为根、y 为第一个邻居尝试匹配图元
    ///
    /// 纯函数：只读取 `unused`，不做任何修改。调用方保证 y 是 x 的邻居且尚未使用。
    /// 按邻接顺序深度优先搜索其余角色，返回第一个满足条件的赋值。
    pub fn find_match(
        &self,
        graph: &Graph,
        x: NodeId,
        y: NodeId,
        unused: &BTreeSet<NodeId>,
    ) -> PlanarResult<Option<GadgetMatch>> {
        let mut bound = Vec::with_capacity(self.node_count());
        bound.push(x);
        bound.push(y);

        if self.extend(graph, unused, &mut bound)? {
            Ok(Some(GadgetMatch {
                kind: self.kind,
                edges: self.edges,
                nodes: bound,
            }))
        } else {
            Ok(None)
        }
    }

    fn extend(
        &self,
        graph: &Graph,
        unused: &BTreeSet<NodeId>,
        bound: &mut Vec<NodeId>,
    ) -> PlanarResult<bool> {
        let Some(rule) = self.rules.get(bound.len() - 2) else {
            return Ok(true);
        };
        debug_assert_eq!(rule.role.index(), bound.len());

        let source = bound[rule.drawn_from.index()];
        for &candidate in graph.neighbors(source)? {
            if !unused.contains(&candidate) || bound.contains(&candidate) {
                continue;
            }
            let adjacent = rule
                .adjacent_to
                .iter()
                .all(|role| graph.has_edge(candidate, bound[role.index()]));
            if !adjacent {
                continue;
            }

            bound.push(candidate);
            if self.extend(graph, unused, bound)? {
                return Ok(true);
            }
            bound.pop();
        }

        Ok(false)
    }
}
