// Flat-shaded icosphere meshes for the core, its shell and the dust.
//
// Each of the 20 icosahedron faces is split into `(detail + 1)^2`
// triangles and every vertex is pushed out to the sphere radius. Output is
// non-indexed so each triangle carries its own face normal.

use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

const ICOSA_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosa_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

#[inline]
pub fn triangle_count(detail: u32) -> usize {
    let cols = detail as usize + 1;
    20 * cols * cols
}

pub fn icosahedron(radius: f32, detail: u32) -> Vec<MeshVertex> {
    let corners = icosa_corners();
    let cols = detail as usize + 1;
    let mut out = Vec::with_capacity(triangle_count(detail) * 3);

    for face in ICOSA_FACES.iter() {
        let (a, b, c) = (corners[face[0]], corners[face[1]], corners[face[2]]);
        // grid[i][j]: row i walks from edge ab toward c, j across the row
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let f = i as f32 / cols as f32;
            let aj = a.lerp(c, f);
            let bj = b.lerp(c, f);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if rows == 0 {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            grid.push(row);
        }
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                push_flat_triangle(&mut out, tri.map(|v| v.normalize() * radius));
            }
        }
    }
    out
}

fn push_flat_triangle(out: &mut Vec<MeshVertex>, tri: [Vec3; 3]) {
    let [mut p0, p1, mut p2] = tri;
    let mut n = (p1 - p0).cross(p2 - p0).normalize_or_zero();
    let centroid = (p0 + p1 + p2) / 3.0;
    // keep winding counter-clockwise when seen from outside
    if n.dot(centroid) < 0.0 {
        std::mem::swap(&mut p0, &mut p2);
        n = -n;
    }
    for p in [p0, p1, p2] {
        out.push(MeshVertex {
            position: p.to_array(),
            normal: n.to_array(),
        });
    }
}
