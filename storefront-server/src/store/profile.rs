//! 用户资料存储
//!
//! 单一演示账户 (认证不在范围内)。不变量：地址/支付方式列表非空时
//! 恰好有一个默认项；删除默认项或唯一地址被业务规则拦截。

use parking_lot::RwLock;
use uuid::Uuid;

use shared::models::{
    Address, AddressCreate, PaymentMethod, PaymentMethodCreate, UserProfile, UserProfileUpdate,
};

use crate::utils::{AppError, AppResult};

/// 演示账户资料存储
#[derive(Debug)]
pub struct ProfileStore {
    inner: RwLock<UserProfile>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(UserProfile {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            addresses: Vec::new(),
            payment_methods: Vec::new(),
        })
    }
}

impl ProfileStore {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            inner: RwLock::new(profile),
        }
    }

    pub fn get(&self) -> UserProfile {
        self.inner.read().clone()
    }

    /// 更新标量字段
    pub fn update(&self, payload: UserProfileUpdate) -> AppResult<UserProfile> {
        let mut profile = self.inner.write();
        if let Some(name) = payload.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name is required"));
            }
            profile.name = name;
        }
        if let Some(email) = payload.email {
            if !email.contains('@') {
                return Err(AppError::validation("Email address is invalid"));
            }
            profile.email = email;
        }
        if let Some(phone) = payload.phone {
            profile.phone = phone;
        }
        Ok(profile.clone())
    }

    // ========== Addresses ==========

    /// 新增地址
    ///
    /// 第一条地址自动成为默认；显式 `is_default` 会替换原默认。
    pub fn add_address(&self, payload: AddressCreate) -> AppResult<Address> {
        if payload.label.trim().is_empty() || payload.details.trim().is_empty() {
            return Err(AppError::validation("Address label and details are required"));
        }

        let mut profile = self.inner.write();
        let make_default = payload.is_default.unwrap_or(false) || profile.addresses.is_empty();
        if make_default {
            for addr in &mut profile.addresses {
                addr.is_default = false;
            }
        }

        let address = Address {
            id: Uuid::new_v4().to_string(),
            label: payload.label,
            details: payload.details,
            is_default: make_default,
        };
        profile.addresses.push(address.clone());
        Ok(address)
    }

    /// 删除地址 (默认地址或唯一地址被拦截)
    pub fn remove_address(&self, address_id: &str) -> AppResult<UserProfile> {
        let mut profile = self.inner.write();
        let idx = profile
            .addresses
            .iter()
            .position(|a| a.id == address_id)
            .ok_or_else(|| AppError::not_found(format!("Address {} not found", address_id)))?;

        if profile.addresses.len() == 1 {
            return Err(AppError::business_rule("Cannot remove the only address"));
        }
        if profile.addresses[idx].is_default {
            return Err(AppError::business_rule(
                "Cannot remove the default address; set another default first",
            ));
        }

        profile.addresses.remove(idx);
        Ok(profile.clone())
    }

    /// 设置默认地址 (清除原默认)
    pub fn set_default_address(&self, address_id: &str) -> AppResult<UserProfile> {
        let mut profile = self.inner.write();
        if !profile.addresses.iter().any(|a| a.id == address_id) {
            return Err(AppError::not_found(format!("Address {} not found", address_id)));
        }
        for addr in &mut profile.addresses {
            addr.is_default = addr.id == address_id;
        }
        Ok(profile.clone())
    }

    // ========== Payment methods ==========

    /// 新增支付方式
    pub fn add_payment_method(&self, payload: PaymentMethodCreate) -> AppResult<PaymentMethod> {
        if payload.label.trim().is_empty() || payload.method_type.trim().is_empty() {
            return Err(AppError::validation("Payment method type and label are required"));
        }

        let mut profile = self.inner.write();
        let make_default =
            payload.is_default.unwrap_or(false) || profile.payment_methods.is_empty();
        if make_default {
            for method in &mut profile.payment_methods {
                method.is_default = false;
            }
        }

        let method = PaymentMethod {
            id: Uuid::new_v4().to_string(),
            method_type: payload.method_type,
            label: payload.label,
            is_default: make_default,
        };
        profile.payment_methods.push(method.clone());
        Ok(method)
    }

    /// 删除支付方式 (默认方式被拦截)
    pub fn remove_payment_method(&self, method_id: &str) -> AppResult<UserProfile> {
        let mut profile = self.inner.write();
        let idx = profile
            .payment_methods
            .iter()
            .position(|m| m.id == method_id)
            .ok_or_else(|| AppError::not_found(format!("Payment method {} not found", method_id)))?;

        if profile.payment_methods[idx].is_default {
            return Err(AppError::business_rule(
                "Cannot remove the default payment method; set another default first",
            ));
        }

        profile.payment_methods.remove(idx);
        Ok(profile.clone())
    }

    /// 设置默认支付方式 (清除原默认)
    pub fn set_default_payment_method(&self, method_id: &str) -> AppResult<UserProfile> {
        let mut profile = self.inner.write();
        if !profile.payment_methods.iter().any(|m| m.id == method_id) {
            return Err(AppError::not_found(format!("Payment method {} not found", method_id)));
        }
        for method in &mut profile.payment_methods {
            method.is_default = method.id == method_id;
        }
        Ok(profile.clone())
    }
}
