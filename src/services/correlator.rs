//! 响应对齐 - 业务能力层
//!
//! 服务按请求顺序返回创建的题目标识，按位置一一对应。
//! 不按内容匹配；数量不一致时整个流程必须终止。

use crate::error::CorrelationError;
use crate::models::{FormItemHandle, FormItemSpec, ItemId};

/// 把服务返回的标识按位置绑定到请求的题目上
///
/// # 参数
/// - `specs`: 提交的题目（按请求顺序）
/// - `created_ids`: 服务返回的标识（与请求顺序一致）
///
/// # 返回
/// 返回每个题目的 `FormItemHandle`；数量不一致时返回 `CorrelationError`
pub fn correlate(
    specs: &[FormItemSpec],
    created_ids: Vec<ItemId>,
) -> Result<Vec<FormItemHandle>, CorrelationError> {
    if specs.len() != created_ids.len() {
        return Err(CorrelationError::LengthMismatch {
            requested: specs.len(),
            returned: created_ids.len(),
        });
    }

    Ok(specs
        .iter()
        .zip(created_ids)
        .map(|(spec, external_id)| FormItemHandle {
            position: spec.position,
            kind: spec.kind,
            external_id,
        })
        .collect())
}
