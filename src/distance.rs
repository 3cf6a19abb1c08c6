/// 地球平均半径，单位为公里
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// 经纬度坐标，单位为度
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// 使用球面余弦定理计算两点之间的大圆距离，单位为公里
pub fn distance(a: Point, b: Point) -> f64 {
    if a == b {
        return 0.0;
    }
    let (s1, c1) = a.latitude.to_radians().sin_cos();
    let (s2, c2) = b.latitude.to_radians().sin_cos();
    // 取绝对值，保证 distance(a, b) 与 distance(b, a) 逐位相等
    let clong = (a.longitude - b.longitude).abs().to_radians().cos();
    // 浮点误差可能使参数略微超出 [-1, 1]，acos 会因此返回 NaN
    let cos_angle = (s1 * s2 + c1 * c2 * clong).clamp(-1.0, 1.0);
    EARTH_RADIUS_KM * cos_angle.acos()
}
